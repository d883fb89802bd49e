use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

use crate::format::DEFAULT_PREFIX;

pub const ENV_PREFIX: &str = "REFDOC";

const DEFAULT_BASE_URL: &str = "https://registry.khronos.org/OpenGL-Refpages/gl4/html";
const DEFAULT_PAGE_EXT: &str = "xhtml";
const DEFAULT_FUNCTION: &str = "glGetProgramInfoLog";
const DEFAULT_CLIPBOARD_HOLD_MS: u64 = 2000;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub page_ext: String,
    pub function: String,
    pub comment_prefix: String,
    pub user_agent: String,
    /// Upper bound on how long to serve an X11/Wayland selection before exiting.
    pub clipboard_hold_ms: u64,
}

impl Settings {
    pub fn clipboard_hold(&self) -> Duration {
        Duration::from_millis(self.clipboard_hold_ms)
    }

    /// Built-in defaults overridden by `REFDOC_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::from_builder(Config::builder().add_source(Environment::with_prefix(ENV_PREFIX)))
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self> {
        let user_agent = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
        builder
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("page_ext", DEFAULT_PAGE_EXT)?
            .set_default("function", DEFAULT_FUNCTION)?
            .set_default("comment_prefix", DEFAULT_PREFIX)?
            .set_default("user_agent", user_agent)?
            .set_default("clipboard_hold_ms", DEFAULT_CLIPBOARD_HOLD_MS)?
            .build()?
            .try_deserialize()
            .context("Invalid REFDOC_* configuration")
    }
}
