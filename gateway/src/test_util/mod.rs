use crate::config::{AssetsConfig, BackendConfig, Config, LoggingConfig, ServerConfig};

/// Configuration pointing at a backend on 127.0.0.1.
pub fn test_config(backend_port: u16, assets_dir: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        backend: BackendConfig {
            host: "127.0.0.1".to_string(),
            port: backend_port,
        },
        assets: AssetsConfig {
            dir: assets_dir.to_string(),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
    }
}
