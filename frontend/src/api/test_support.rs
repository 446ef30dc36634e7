#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PUT: Method = Method::PUT;
    pub const DELETE: Method = Method::DELETE;

    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    #[derive(Default)]
    struct Inner {
        routes: Vec<Route>,
        received: Vec<ReceivedRequest>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        response: MockResponse,
    }

    /// A request as seen by the mock, for assertions on what was sent.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ReceivedRequest {
        pub method: Method,
        pub path: String,
        pub query: Vec<(String, String)>,
        pub body: Option<Value>,
    }

    impl ReceivedRequest {
        pub fn query_value(&self, key: &str) -> Option<&str> {
            self.query
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        }
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner::default())),
                base: format!("http://mock-{}", id),
            }
        }

        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register_mock(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let status = then.status.unwrap_or(200);
            let response = match then.text {
                Some(text) => MockResponse::text(status, text),
                None => MockResponse::json(
                    status,
                    then.body.unwrap_or_else(|| serde_json::json!({})),
                ),
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                response,
            });
        }

        pub fn received(&self) -> Vec<ReceivedRequest> {
            self.inner.lock().expect("mock lock").received.clone()
        }

        pub fn last_received(&self) -> Option<ReceivedRequest> {
            self.received().pop()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method().clone();
            let path = request.url().path().to_string();
            let mut inner = self
                .inner
                .lock()
                .map_err(|_| ApiError::network("mock lock"))?;

            inner.received.push(ReceivedRequest {
                method: method.clone(),
                path: path.clone(),
                query: request
                    .url()
                    .query_pairs()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect(),
                body: request
                    .body()
                    .and_then(|body| body.as_bytes())
                    .and_then(|bytes| serde_json::from_slice(bytes).ok()),
            });

            inner
                .routes
                .iter()
                .rev()
                .find(|route| route.method == method && route.path == path)
                .map(|route| route.response.clone())
                .ok_or_else(|| ApiError::network(format!("No mock for {} {}", method, path)))
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        text: Option<String>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn body(&mut self, text: &str) -> &mut Self {
            self.text = Some(text.to_string());
            self
        }
    }
}
