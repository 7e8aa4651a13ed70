use std::env;

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "8080".to_string());

        Self { ip, port }
    }

    /// "ip:port", as handed to the TCP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }

    /// Address advertised in the OpenAPI document
    pub fn base_url(&self) -> String {
        format!("http://{}", self.bind_address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ServerConfig {
        ServerConfig {
            ip: "0.0.0.0".to_string(),
            port: "3000".to_string(),
        }
    }

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        assert_eq!(config().bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn should_prefix_base_url_with_scheme() {
        assert_eq!(config().base_url(), "http://0.0.0.0:3000");
    }
}
