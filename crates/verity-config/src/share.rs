//! Share-link settings.

use serde::{Deserialize, Serialize};

fn default_page_url() -> String {
    "http://localhost:8080/".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShareConfig {
    /// Page that renders shared results; links are `<page_url>?result=<token>`.
    #[serde(default = "default_page_url")]
    pub page_url: String,

    /// Copy generated links to the system clipboard.
    #[serde(default = "default_copy")]
    pub copy_to_clipboard: bool,
}

const fn default_copy() -> bool {
    true
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            page_url: default_page_url(),
            copy_to_clipboard: default_copy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ShareConfig::default();
        assert_eq!(config.page_url, "http://localhost:8080/");
        assert!(config.copy_to_clipboard);
    }
}
