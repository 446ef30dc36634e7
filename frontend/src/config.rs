use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;
pub const MAX_SEARCH_DEBOUNCE_MS: u64 = 5_000;

const ENV_GLOBAL: &str = "__PAYROLL_CONSOLE_ENV";
const CONFIG_GLOBAL: &str = "__PAYROLL_CONSOLE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api_base_url: String,
    pub default_page_size: usize,
    pub search_debounce_ms: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}

/// Config as published by `env.js`, `window.__PAYROLL_CONSOLE_CONFIG` or
/// `config.json`. Both key casings are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "DEFAULT_PAGE_SIZE")]
    pub default_page_size: Option<usize>,
    #[serde(default, alias = "SEARCH_DEBOUNCE_MS")]
    pub search_debounce_ms: Option<u64>,
}

impl RawRuntimeConfig {
    pub fn resolve(self) -> RuntimeConfig {
        let defaults = RuntimeConfig::default();
        let api_base_url = self
            .api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);
        let default_page_size = match self.default_page_size {
            Some(0) => {
                log::warn!("default_page_size must be at least 1; using {}", DEFAULT_PAGE_SIZE);
                defaults.default_page_size
            }
            Some(size) => size,
            None => defaults.default_page_size,
        };
        let search_debounce_ms = match self.search_debounce_ms {
            Some(ms) if ms > MAX_SEARCH_DEBOUNCE_MS => {
                log::warn!(
                    "search_debounce_ms {} exceeds {}; using {}",
                    ms,
                    MAX_SEARCH_DEBOUNCE_MS,
                    DEFAULT_SEARCH_DEBOUNCE_MS
                );
                defaults.search_debounce_ms
            }
            Some(ms) => ms,
            None => defaults.search_debounce_ms,
        };
        RuntimeConfig {
            api_base_url,
            default_page_size,
            search_debounce_ms,
        }
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RawRuntimeConfig;
    use anyhow::{anyhow, Context};

    pub fn read_global(name: &str) -> anyhow::Result<Option<RawRuntimeConfig>> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no global `window` exists"))?;
        let value = js_sys::Reflect::get(&window, &name.into())
            .map_err(|_| anyhow!("cannot read window.{}", name))?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        let json = js_sys::JSON::stringify(&value)
            .map_err(|_| anyhow!("window.{} is not serialisable", name))?;
        let json: String = json.into();
        let raw = serde_json::from_str(&json)
            .with_context(|| format!("window.{} has an unexpected shape", name))?;
        Ok(Some(raw))
    }

    pub async fn fetch_config_json() -> anyhow::Result<RawRuntimeConfig> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no global `window` exists"))?;
        let href = window
            .location()
            .href()
            .map_err(|_| anyhow!("cannot read window.location"))?;
        let url = reqwest::Url::parse(&href)
            .and_then(|base| base.join("config.json"))
            .context("cannot build config.json url")?;
        let response = reqwest::get(url).await.context("config.json request failed")?;
        if !response.status().is_success() {
            return Err(anyhow!("config.json returned {}", response.status()));
        }
        response
            .json::<RawRuntimeConfig>()
            .await
            .context("config.json is not valid")
    }
}

#[cfg(target_arch = "wasm32")]
async fn discover() -> anyhow::Result<RawRuntimeConfig> {
    for name in [ENV_GLOBAL, CONFIG_GLOBAL] {
        match browser::read_global(name) {
            Ok(Some(raw)) => return Ok(raw),
            Ok(None) => {}
            Err(err) => log::warn!("ignoring {}: {:#}", name, err),
        }
    }
    browser::fetch_config_json().await
}

#[cfg(not(target_arch = "wasm32"))]
async fn discover() -> anyhow::Result<RawRuntimeConfig> {
    anyhow::bail!(
        "runtime config globals {} and {} are only available in the browser",
        ENV_GLOBAL,
        CONFIG_GLOBAL
    )
}

/// Resolves the runtime config once and caches it. Any failure along the
/// lookup chain falls back to the defaults.
pub async fn load() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let resolved = match discover().await {
        Ok(raw) => raw.resolve(),
        Err(err) => {
            log::warn!("runtime config unavailable, using defaults: {:#}", err);
            RuntimeConfig::default()
        }
    };
    RUNTIME_CONFIG.get_or_init(|| resolved).clone()
}

/// Config already resolved by [`load`], or the defaults before that.
pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

pub async fn await_api_base_url() -> String {
    load().await.api_base_url
}

pub async fn init() {
    let config = load().await;
    log::info!(
        "runtime config: api={} page_size={} debounce={}ms",
        config.api_base_url,
        config.default_page_size,
        config.search_debounce_ms
    );
}
