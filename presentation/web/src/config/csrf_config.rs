use std::env;

use csrf::token_manager::CsrfTokenManagerHmac;

/// Configuration for anti-forgery tokens.
pub struct CsrfConfig {
    pub secret: Option<String>,
}

impl CsrfConfig {
    /// Environment variables:
    /// - CSRF_SECRET: HMAC key (optional). Without it a random key is generated,
    ///   so tokens rendered before a restart stop validating.
    pub fn from_env() -> Self {
        Self {
            secret: env::var("CSRF_SECRET").ok().filter(|s| !s.is_empty()),
        }
    }

    pub fn token_manager(&self) -> anyhow::Result<CsrfTokenManagerHmac> {
        let manager = match &self.secret {
            Some(secret) => CsrfTokenManagerHmac::new(secret.as_bytes())?,
            None => {
                tracing::warn!("CSRF_SECRET not set; using a per-process random secret");
                CsrfTokenManagerHmac::with_random_secret()?
            }
        };
        Ok(manager)
    }
}
