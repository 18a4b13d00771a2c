//! Config file loading

use super::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SECTION: &str = "askterm";

pub fn load_config(search_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(search_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let content = match fs::read_to_string(&config_file) {
        Ok(content) => content,
        Err(e) if config_path_provided => {
            return Err(e)
                .with_context(|| format!("Failed reading config file: {}", config_file.display()))
        }
        Err(e) => {
            tracing::warn!("Failed reading auto-discovered config {}: {}", config_file.display(), e);
            return Ok(Config::default());
        }
    };

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            // Auto-discovered: warn and fall back to defaults
            tracing::warn!("Failed to parse auto-discovered config {}: {:#}", config_file.display(), e);
            Ok(Config::default())
        }
    }
}

/// Parse TOML config, accepting either top-level keys or an `[askterm]` table.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, accepting either top-level keys or an `askterm:` mapping.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    // An empty document parses as null
    if config_val.is_null() {
        return Ok(Config::default());
    }

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(search_dir: &Path) -> Option<PathBuf> {
    let candidates = [
        "askterm.toml",
        ".askterm.toml",
        "askterm.yml",
        ".askterm.yml",
        "askterm.yaml",
        ".askterm.yaml",
    ];

    candidates.iter().map(|candidate| search_dir.join(candidate)).find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults_when_missing() {
        let tmp = TempDir::new().expect("tmp");
        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_load_toml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join("askterm.toml"),
            "backend_url = 'http://localhost:3000/token'\n\n[templates]\nsummarize = 'TL;DR:'\n",
        )
        .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.backend_url.as_deref(), Some("http://localhost:3000/token"));
        assert_eq!(cfg.templates.summarize.as_deref(), Some("TL;DR:"));
        assert!(cfg.templates.git_message.is_none());
    }

    #[test]
    fn test_load_nested_toml_section() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("custom.toml");
        fs::write(&path, "[askterm]\nreverse_proxy_url = 'http://proxy/chat'\n").expect("write");

        let cfg = load_config(tmp.path(), Some(&path)).expect("config");
        assert_eq!(cfg.reverse_proxy_url.as_deref(), Some("http://proxy/chat"));
    }

    #[test]
    fn test_load_yaml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join(".askterm.yml"),
            "askterm:\n  templates:\n    comment_code: 'Comment this: REQ_TEXT'\n",
        )
        .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.templates.comment_code.as_deref(), Some("Comment this: REQ_TEXT"));
    }

    #[test]
    fn test_explicit_config_invalid_type_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "backend_url = 123\n").expect("write");

        let result = load_config(tmp.path(), Some(&path));
        assert!(result.is_err(), "explicit config with invalid type should return Err");
    }

    #[test]
    fn test_explicit_config_unknown_key_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "backend = 'http://typo'\n").expect("write");

        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_config_unknown_template_key_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "[templates]\nsumarize = 'TL;DR:'\n").expect("write");

        let err = load_config(tmp.path(), Some(&path)).expect_err("misspelled template");
        assert!(format!("{err:#}").contains("sumarize"), "{err:#}");
    }

    #[test]
    fn test_explicit_missing_file_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("absent.toml");
        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_unsupported_extension_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("askterm.ini");
        fs::write(&path, "backend_url=x\n").expect("write");
        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_auto_discovered_invalid_config_returns_default() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("askterm.toml"), "backend_url = [1, 2]\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("should not error on auto-discovery");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_toml_preferred_over_yaml_when_both_exist() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("askterm.toml"), "backend_url = 'from-toml'\n").expect("write");
        fs::write(tmp.path().join("askterm.yml"), "backend_url: from-yaml\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.backend_url.as_deref(), Some("from-toml"));
    }
}
