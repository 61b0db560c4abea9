use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

use crate::router::location::normalize_base;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    /// History base the app is mounted under, e.g. `/` or `/quizdom`
    pub router_base: String,
    /// Built `index.html` served for every app route
    pub spa_index_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let router_base = env::var("ROUTER_BASE").unwrap_or_else(|_| "/".to_string());
        let router_base = normalize_base(&router_base)
            .context("ROUTER_BASE must be an absolute path such as '/' or '/quizdom'")?;

        let spa_index_path = env::var("SPA_INDEX_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            service_port,
            service_host,
            router_base,
            spa_index_path,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Router base: {}", self.router_base);
        tracing::info!("  App shell: {}",
            self.spa_index_path
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "built-in".to_string()));
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
            env::remove_var("ROUTER_BASE");
            env::remove_var("SPA_INDEX_PATH");
        }
    }

    #[test]
    #[serial]
    fn test_config_with_all_vars() {
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
            env::set_var("ROUTER_BASE", "/quizdom/");
            env::set_var("SPA_INDEX_PATH", "dist/index.html");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.router_base, "/quizdom");
        assert_eq!(config.spa_index_path, Some(PathBuf::from("dist/index.html")));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_config_with_defaults() {
        clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.router_base, "/");
        assert_eq!(config.spa_index_path, None);
    }

    #[test]
    #[serial]
    fn test_invalid_port() {
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_port_out_of_range() {
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_invalid_router_base() {
        clear_env_vars();
        unsafe {
            env::set_var("ROUTER_BASE", "quizdom");
        }

        let error = Config::from_env().unwrap_err();
        assert!(error.to_string().contains("ROUTER_BASE"));

        clear_env_vars();
    }
}
