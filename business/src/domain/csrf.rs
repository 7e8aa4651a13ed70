/// Anti-forgery token port.
///
/// Tokens are bound to a scope string (for example `delete42`), so a token
/// rendered for one action cannot be replayed against another.
pub trait CsrfTokenService: Send + Sync {
    fn generate_token(&self, scope: &str) -> String;
    fn is_token_valid(&self, scope: &str, token: &str) -> bool;
}
