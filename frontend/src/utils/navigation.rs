//! Page changes. [`Navigator`] moves between routes of the running app and
//! keeps in-memory state such as queued toasts. The `redirect_to` family
//! reloads the document through `window.location` and is kept for leaving
//! the session (401, logout). Outside the browser full reloads only log.

use leptos::*;
use std::rc::Rc;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Route change inside the single-page app.
#[derive(Clone)]
pub struct Navigator(Rc<dyn Fn(&str)>);

impl Navigator {
    pub fn new(go: impl Fn(&str) + 'static) -> Self {
        Self(Rc::new(go))
    }

    pub fn go(&self, path: &str) {
        log::debug!("navigating to {}", path);
        (self.0)(path)
    }
}

/// Navigator for the current owner: a provided [`Navigator`] context first,
/// then the router's `navigate`, and a full reload when no router is
/// mounted.
pub fn use_navigator() -> Navigator {
    if let Some(navigator) = use_context::<Navigator>() {
        return navigator;
    }
    if use_context::<leptos_router::RouterContext>().is_some() {
        let navigate = leptos_router::use_navigate();
        return Navigator::new(move |path| navigate(path, Default::default()));
    }
    Navigator::new(redirect_to)
}

#[cfg(target_arch = "wasm32")]
pub fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_path() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn redirect_to(path: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.location().set_href(path) {
            log::error!("navigation to {} failed: {:?}", path, err);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(path: &str) {
    log::debug!("navigation to {} skipped outside the browser", path);
}

/// Sends the user to the login page unless they are already there.
pub fn redirect_to_login() {
    if current_path().as_deref() == Some(LOGIN_PATH) {
        return;
    }
    redirect_to(LOGIN_PATH);
}

#[cfg(target_arch = "wasm32")]
pub fn reload() {
    if let Some(win) = web_sys::window() {
        let _ = win.location().reload();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn reload() {
    log::debug!("reload skipped outside the browser");
}
