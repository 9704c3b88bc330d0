//! Runtime configuration.
//!
//! On WASM the values come from an optional `window.__STOREFRONT_ENV` global
//! (written by `env.js` at deploy time), falling back to a fetched
//! `./config.json`. Host builds read ordinary environment variables so tests
//! can drive the same code paths.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_HOME_ENTRY_ID: &str = "homePage";

const MODE_KEY: &str = "CONTENTFUL_MODE";
const SPACE_ID_KEY: &str = "CONTENTFUL_SPACE_ID";
const DELIVERY_TOKEN_KEY: &str = "CONTENTFUL_DELIVERY_API_ACCESS_TOKEN";
const PREVIEW_TOKEN_KEY: &str = "CONTENTFUL_PREVIEW_API_ACCESS_TOKEN";
const HOME_ENTRY_KEY: &str = "CONTENTFUL_HOME_ENTRY_ID";
const API_BASE_URL_KEY: &str = "API_BASE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

/// Which Contentful endpoint a fetch should hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmsMode {
    Production,
    Preview,
}

impl CmsMode {
    /// `"PROD"` selects the delivery endpoint; any other value (including a
    /// missing flag) selects the preview endpoint.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "PROD" {
            CmsMode::Production
        } else {
            CmsMode::Preview
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsSettings {
    pub mode: CmsMode,
    pub space_id: String,
    pub delivery_token: String,
    pub preview_token: String,
}

impl CmsSettings {
    /// Resolved from the environment at call time; the mode flag is never
    /// cached.
    pub fn load() -> Self {
        Self {
            mode: CmsMode::from_flag(&env_value(MODE_KEY).unwrap_or_default()),
            space_id: env_value(SPACE_ID_KEY).unwrap_or_default(),
            delivery_token: env_value(DELIVERY_TOKEN_KEY).unwrap_or_default(),
            preview_token: env_value(PREVIEW_TOKEN_KEY).unwrap_or_default(),
        }
    }

    pub fn host(&self) -> &'static str {
        match self.mode {
            CmsMode::Production => "https://cdn.contentful.com",
            CmsMode::Preview => "https://preview.contentful.com",
        }
    }

    pub fn access_token(&self) -> &str {
        match self.mode {
            CmsMode::Production => &self.delivery_token,
            CmsMode::Preview => &self.preview_token,
        }
    }

    pub fn entry_path(&self, entry_id: &str) -> String {
        format!(
            "/spaces/{}/environments/master/entries/{}?access_token={}",
            self.space_id,
            entry_id,
            self.access_token()
        )
    }

    pub fn entry_url(&self, entry_id: &str) -> String {
        format!("{}{}", self.host(), self.entry_path(entry_id))
    }
}

/// Entry id of the storefront home content, overridable per deployment.
pub fn home_entry_id() -> String {
    env_value(HOME_ENTRY_KEY).unwrap_or_else(|| DEFAULT_HOME_ENTRY_ID.to_string())
}

#[cfg(target_arch = "wasm32")]
fn env_value(key: &str) -> Option<String> {
    // Expect optional global object: window.__STOREFRONT_ENV = { KEY: "..." }
    let window = web_sys::window()?;
    let env = js_sys::Reflect::get(&window, &"__STOREFRONT_ENV".into()).ok()?;
    if env.is_undefined() || env.is_null() {
        return None;
    }
    js_sys::Reflect::get(&js_sys::Object::from(env), &key.into())
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .and_then(|value| value.as_string())
        .filter(|value| !value.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

#[cfg(target_arch = "wasm32")]
static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Base URL of the auth/commerce API.
#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = env_value(API_BASE_URL_KEY) {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    env_value(API_BASE_URL_KEY).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

#[cfg(target_arch = "wasm32")]
pub async fn init() {
    let _ = await_api_base_url().await;
}
