use super::{
    catalog_config::CatalogConfig, csrf_config::CsrfConfig, database_config::StorageConfig,
    server_config::ServerConfig,
};

pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub csrf: CsrfConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            storage: StorageConfig::from_env()?,
            csrf: CsrfConfig::from_env(),
            catalog: CatalogConfig::from_env()?,
        })
    }
}
