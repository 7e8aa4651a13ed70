use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;
use thiserror::Error;

use business::domain::csrf::CsrfTokenService;

type HmacSha256 = Hmac<Sha256>;

const GENERATED_SECRET_LEN: usize = 32;

#[derive(Error, Debug)]
pub enum CsrfError {
    #[error("csrf.empty_secret")]
    EmptySecret,
    #[error("csrf.invalid_secret")]
    InvalidSecret,
}

/// Stateless anti-forgery tokens: `base64url(HMAC-SHA256(secret, scope))`.
///
/// The same secret must be used for rendering and validating, so every
/// instance of the service has to share it (see `CSRF_SECRET`).
#[derive(Clone)]
pub struct CsrfTokenManagerHmac {
    mac: HmacSha256,
}

impl CsrfTokenManagerHmac {
    pub fn new(secret: &[u8]) -> Result<Self, CsrfError> {
        if secret.is_empty() {
            return Err(CsrfError::EmptySecret);
        }
        let mac = HmacSha256::new_from_slice(secret).map_err(|_| CsrfError::InvalidSecret)?;
        Ok(Self { mac })
    }

    /// Creates a manager with a secret that only lives as long as the process.
    pub fn with_random_secret() -> Result<Self, CsrfError> {
        let mut secret = [0u8; GENERATED_SECRET_LEN];
        rand::rng().fill(&mut secret);
        Self::new(&secret)
    }

    fn keyed(&self, scope: &str) -> HmacSha256 {
        let mut mac = self.mac.clone();
        mac.update(scope.as_bytes());
        mac
    }
}

impl CsrfTokenService for CsrfTokenManagerHmac {
    fn generate_token(&self, scope: &str) -> String {
        URL_SAFE_NO_PAD.encode(self.keyed(scope).finalize().into_bytes())
    }

    fn is_token_valid(&self, scope: &str, token: &str) -> bool {
        match URL_SAFE_NO_PAD.decode(token.trim()) {
            Ok(signature) if !signature.is_empty() => {
                self.keyed(scope).verify_slice(&signature).is_ok()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> CsrfTokenManagerHmac {
        CsrfTokenManagerHmac::new(b"test-secret").unwrap()
    }

    #[test]
    fn should_accept_token_generated_for_same_scope() {
        let manager = manager();
        let token = manager.generate_token("delete1");

        assert!(manager.is_token_valid("delete1", &token));
    }

    #[test]
    fn should_reject_token_generated_for_other_scope() {
        let manager = manager();
        let token = manager.generate_token("delete1");

        assert!(!manager.is_token_valid("delete2", &token));
    }

    #[test]
    fn should_reject_token_from_other_secret() {
        let token = CsrfTokenManagerHmac::new(b"other-secret")
            .unwrap()
            .generate_token("delete1");

        assert!(!manager().is_token_valid("delete1", &token));
    }

    #[test]
    fn should_reject_empty_and_malformed_tokens() {
        let manager = manager();

        assert!(!manager.is_token_valid("delete1", ""));
        assert!(!manager.is_token_valid("delete1", "not base64 !!"));
        assert!(!manager.is_token_valid("delete1", "AAAA"));
    }

    #[test]
    fn should_generate_stable_url_safe_tokens() {
        let manager = manager();
        let token = manager.generate_token("delete42");

        assert_eq!(token, manager.generate_token("delete42"));
        assert_eq!(token.len(), 43);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn should_refuse_empty_secret() {
        let result = CsrfTokenManagerHmac::new(b"");

        assert!(matches!(result, Err(CsrfError::EmptySecret)));
    }

    #[test]
    fn should_not_share_tokens_between_random_secrets() {
        let first = CsrfTokenManagerHmac::with_random_secret().unwrap();
        let second = CsrfTokenManagerHmac::with_random_secret().unwrap();

        let token = first.generate_token("delete1");
        assert!(!second.is_token_valid("delete1", &token));
    }
}
