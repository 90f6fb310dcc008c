use std::net::SocketAddr;
use std::time::Duration;

use rand::RngCore;

use crate::auth::{decode_secret_key, AuthConfig};

#[derive(Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub auth: AuthConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let listen_addr = std::env::var("PK_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid PK_LISTEN_ADDR");

        let db_path =
            std::env::var("PK_DB_PATH").unwrap_or_else(|_| "./db/primekit.db".to_string());

        let cors_allow: Vec<String> = std::env::var("PK_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_ms = std::env::var("PK_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30_000);

        let static_dir = std::env::var("PK_STATIC_DIR").unwrap_or_else(|_| "dist".to_string());

        let jwt_secret = match std::env::var("PK_SECRET_KEY") {
            Ok(raw) => decode_secret_key(&raw).expect("Invalid PK_SECRET_KEY"),
            Err(_) => {
                tracing::warn!(
                    "PK_SECRET_KEY is not set; signing tokens with an ephemeral key, sessions will not survive a restart"
                );
                let mut key = [0u8; 32];
                rand::thread_rng().fill_bytes(&mut key);
                key.to_vec()
            }
        };

        let token_ttl_secs = std::env::var("PK_TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(86_400);

        Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(request_timeout_ms),
            static_dir,
            auth: AuthConfig {
                jwt_secret,
                token_ttl: Duration::from_secs(token_ttl_secs),
            },
        }
    }
}
