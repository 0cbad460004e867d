use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Header set by the fronting proxy. Falls back to the peer address when
    /// absent from the request.
    #[serde(default = "default_trusted_ip_header")]
    pub trusted_ip_header: Option<String>,

    /// When non-empty, `blocklogin` decisions only deny these paths.
    #[serde(default)]
    pub login_paths: Vec<String>,

    /// Paths that are never evaluated.
    #[serde(default)]
    pub exempt_paths: Vec<String>,

    #[serde(default)]
    pub reject_invalid_address: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            trusted_ip_header: default_trusted_ip_header(),
            login_paths: vec![],
            exempt_paths: vec![],
            reject_invalid_address: false,
        }
    }
}

fn default_trusted_ip_header() -> Option<String> {
    Some("X-Real-IP".to_string())
}
