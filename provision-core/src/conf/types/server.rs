use serde::{Deserialize, Serialize};

/// TLS cipher list handed to the HTTPS listener. Order is preference order;
/// `!` entries exclude whole families.
pub const CIPHER_SUITES: [&str; 11] = [
    "ECDHE-ECDSA-AES256-GCM-SHA384",
    "ECDHE-RSA-AES256-GCM-SHA384",
    "ECDHE-RSA-AES256-CBC-SHA384",
    "ECDHE-RSA-AES256-CBC-SHA256",
    "ECDHE-ECDSA-AES128-GCM-SHA256",
    "ECDHE-RSA-AES128-GCM-SHA256",
    "DHE-RSA-AES128-GCM-SHA256",
    "DHE-RSA-AES256-GCM-SHA384",
    "!aNULL",
    "!MD5",
    "!DSS",
];

pub const SECONDS_PER_DAY: u64 = 86_400;

/// The colon-joined cipher string stored as `cipherKey`.
pub fn cipher_key() -> String {
    CIPHER_SUITES.join(":")
}

/// HSTS is entered in days but stored as a max-age in seconds.
pub fn hsts_seconds(days: u32) -> u64 {
    u64::from(days) * SECONDS_PER_DAY
}

/// Contents of `server.json`.
///
/// Field order matches the order keys are written in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// HSTS max-age in seconds.
    pub hsts_time_limit: u64,

    pub cipher_key: String,

    /// `<cert dir>/privkey.pem`
    pub priv_key_path: String,

    /// `<cert dir>/fullchain.pem`
    pub fullchain_path: String,

    pub http_port: u16,
    pub https_port: u16,

    /// UDP port the monitor process listens on.
    pub monitor_port: u16,

    pub client_id: String,
    pub admin_secret: String,
}
