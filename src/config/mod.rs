//! Configuration loading and merging
//!
//! Handles loading from config files, environment variables, and CLI arguments
//! with proper precedence (CLI/Env > File > Defaults).

pub mod loader;
pub mod merge;

use crate::templates::TemplateOverrides;
use serde::Deserialize;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Endpoint returning `{ "token": ... }` for the chat session.
    pub backend_url: Option<String>,
    /// Reverse-proxy endpoint that accepts chat messages.
    pub reverse_proxy_url: Option<String>,
    pub templates: TemplateOverrides,
}
