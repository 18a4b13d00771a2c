//! Merge command-line and environment values over file configuration.

use super::Config;

/// Values taken from flags (or their backing environment variables).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub backend_url: Option<String>,
    pub reverse_proxy_url: Option<String>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(url) = non_empty(cli.backend_url) {
        config.backend_url = Some(url);
    }
    if let Some(url) = non_empty(cli.reverse_proxy_url) {
        config.reverse_proxy_url = Some(url);
    }
    config.backend_url = non_empty(config.backend_url);
    config.reverse_proxy_url = non_empty(config.reverse_proxy_url);
    config
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_values_win_over_file() {
        let file = Config {
            backend_url: Some("http://file/token".into()),
            reverse_proxy_url: Some("http://file/chat".into()),
            ..Default::default()
        };
        let merged = merge_cli_with_config(
            file,
            CliOverrides { backend_url: Some("http://cli/token".into()), reverse_proxy_url: None },
        );
        assert_eq!(merged.backend_url.as_deref(), Some("http://cli/token"));
        assert_eq!(merged.reverse_proxy_url.as_deref(), Some("http://file/chat"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let file = Config { backend_url: Some("  ".into()), ..Default::default() };
        let merged = merge_cli_with_config(
            file,
            CliOverrides { backend_url: None, reverse_proxy_url: Some(String::new()) },
        );
        assert!(merged.backend_url.is_none());
        assert!(merged.reverse_proxy_url.is_none());
    }
}
