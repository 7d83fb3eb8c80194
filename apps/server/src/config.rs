//! Server configuration, read from the environment at startup.
//!
//! Upstream proxy targets are deliberately *not* part of this struct: the
//! proxy handlers read them from the environment per request so keys can be
//! rotated without a restart.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::RngCore;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    /// Base64-encoded JWT signing key.
    pub auth_secret: String,
    /// Seed admin credentials, applied only when the profile table is empty.
    pub bootstrap_admin_email: Option<String>,
    pub bootstrap_admin_password: Option<String>,
}

fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        let auth_secret = env_trimmed("BD_AUTH_SECRET").unwrap_or_else(|| {
            // Ephemeral key: sessions do not survive a restart. Fine for
            // development, set BD_AUTH_SECRET in production.
            tracing::warn!("BD_AUTH_SECRET not set; generating an ephemeral signing key");
            let mut bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut bytes);
            BASE64.encode(bytes)
        });

        Config {
            listen_addr: env_trimmed("BD_LISTEN_ADDR").unwrap_or_else(|| "0.0.0.0:8400".to_string()),
            db_path: env_trimmed("BD_DB_PATH").unwrap_or_else(|| "data/brickdesk.db".to_string()),
            auth_secret,
            bootstrap_admin_email: env_trimmed("BD_BOOTSTRAP_ADMIN_EMAIL"),
            bootstrap_admin_password: env_trimmed("BD_BOOTSTRAP_ADMIN_PASSWORD"),
        }
    }
}
