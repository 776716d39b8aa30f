//! Configuration validation

use crate::{AppConfig, ChainConfig, ConfigError, Result};
use std::collections::HashSet;

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate the entire application configuration
pub fn validate_config(config: &AppConfig) -> Result<()> {
    let mut errors = Vec::new();

    // Validate network config
    if let Err(e) = validate_log_level(&config.network.log_level) {
        errors.push(e);
    }

    if config.network.metrics_port == 0 {
        errors.push(ValidationError::new(
            "network.metrics_port",
            "metrics port must be greater than 0",
        ));
    }

    // Validate store config
    if config.store.base_url.is_empty() {
        errors.push(ValidationError::new(
            "store.base_url",
            "intent store URL is required",
        ));
    } else if let Err(e) = validate_url(&config.store.base_url) {
        errors.push(ValidationError::new("store.base_url", e));
    }

    if config.store.request_timeout_ms == 0 {
        errors.push(ValidationError::new(
            "store.request_timeout_ms",
            "must be greater than 0",
        ));
    }

    // Validate chains
    for (chain_name, chain_config) in &config.chains {
        if let Err(e) = validate_chain_config(chain_config) {
            errors.push(ValidationError::new(format!("chains.{chain_name}"), e));
        }
    }

    // Check for duplicate numeric chain IDs across entries
    let mut seen_ids = HashSet::new();
    for (chain_name, chain_config) in &config.chains {
        if !seen_ids.insert(chain_config.chain_id) {
            errors.push(ValidationError::new(
                format!("chains.{chain_name}.chain_id"),
                format!("duplicate chain_id {}", chain_config.chain_id),
            ));
        }
    }

    // Validate solver config
    if config.solver.chain.is_empty() {
        errors.push(ValidationError::new(
            "solver.chain",
            "solver chain is required",
        ));
    } else if !config.chains.contains_key(&config.solver.chain) {
        errors.push(ValidationError::new(
            "solver.chain",
            format!("chain '{}' not found in chains config", config.solver.chain),
        ));
    }

    // Validate settlement config
    if config.settlement.submit_timeout_ms == 0 {
        errors.push(ValidationError::new(
            "settlement.submit_timeout_ms",
            "must be greater than 0",
        ));
    }

    // Return all errors if any were found
    if !errors.is_empty() {
        let error_msg = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ConfigError::ValidationError(error_msg));
    }

    Ok(())
}

/// Validate a chain configuration
pub fn validate_chain_config(chain: &ChainConfig) -> std::result::Result<(), String> {
    if chain.chain_id == 0 {
        return Err("chain_id must be greater than 0".to_string());
    }

    if chain.rpc_url.is_empty() {
        return Err("rpc_url is required".to_string());
    }

    validate_url(&chain.rpc_url)?;

    if chain.settlement_address.is_empty() {
        return Err("settlement_address is required".to_string());
    }

    // Settlement contracts are EVM addresses (should be like "0x52ab...")
    if !chain.settlement_address.starts_with("0x") {
        return Err("settlement_address must be 0x-prefixed".to_string());
    }

    if chain.confirmation_timeout_ms == 0 {
        return Err("confirmation_timeout_ms must be greater than 0".to_string());
    }

    Ok(())
}

/// Validate a URL
pub fn validate_url(url: &str) -> std::result::Result<(), String> {
    if url.is_empty() {
        return Err("URL cannot be empty".to_string());
    }

    // Basic URL validation - check for scheme
    if !url.starts_with("http://")
        && !url.starts_with("https://")
        && !url.starts_with("ws://")
        && !url.starts_with("wss://")
    {
        return Err("URL must start with http://, https://, ws://, or wss://".to_string());
    }

    Ok(())
}

/// Validate log level
fn validate_log_level(level: &str) -> std::result::Result<(), ValidationError> {
    match level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ValidationError::new(
            "network.log_level",
            format!(
                "invalid log level '{level}', must be one of: trace, debug, info, warn, error"
            ),
        )),
    }
}

/// Validate URLs across the entire configuration
pub fn validate_urls(config: &AppConfig) -> Result<()> {
    let mut errors = Vec::new();

    if let Err(e) = validate_url(&config.store.base_url) {
        errors.push(ValidationError::new("store.base_url", e));
    }

    for (chain_name, chain) in &config.chains {
        if let Err(e) = validate_url(&chain.rpc_url) {
            errors.push(ValidationError::new(
                format!("chains.{chain_name}.rpc_url"),
                e,
            ));
        }
    }

    if !errors.is_empty() {
        let error_msg = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ConfigError::ValidationError(error_msg));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AppConfig, ChainConfig, Environment, NetworkConfig, SettlementConfig, SolverConfig,
        StoreConfig,
    };
    use std::collections::HashMap;

    fn valid_config() -> AppConfig {
        let mut chains = HashMap::new();
        chains.insert(
            "sepolia".to_string(),
            ChainConfig {
                chain_id: 11155111,
                rpc_url: "https://rpc.sepolia.org".to_string(),
                settlement_address: "0x52ab74ae4a24b0f3a9cbea11de12eda4b124f8f9".to_string(),
                confirmation_timeout_ms: 120000,
            },
        );
        chains.insert(
            "mumbai".to_string(),
            ChainConfig {
                chain_id: 80001,
                rpc_url: "https://rpc-mumbai.maticvigil.com".to_string(),
                settlement_address: "0x9a2b7c6e1f0d3a8b5c4e7f2a1d0b9c8e7f6a5b4c".to_string(),
                confirmation_timeout_ms: 120000,
            },
        );

        AppConfig {
            network: NetworkConfig {
                environment: Environment::Testnet,
                log_level: "info".to_string(),
                metrics_enabled: true,
                metrics_port: 9090,
            },
            store: StoreConfig {
                base_url: "http://localhost:3001".to_string(),
                request_timeout_ms: 10000,
            },
            chains,
            solver: SolverConfig {
                chain: "sepolia".to_string(),
            },
            settlement: SettlementConfig {
                submit_timeout_ms: 120000,
                journal_path: None,
            },
        }
    }

    #[test]
    fn test_validate_valid_config() {
        let config = valid_config();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_default_config_fails_validation() {
        // Defaults carry no chains and no solver chain name
        let config = AppConfig::default();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = valid_config();
        config.network.log_level = "verbose".to_string();

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("network.log_level"));
    }

    #[test]
    fn test_zero_metrics_port() {
        let mut config = valid_config();
        config.network.metrics_port = 0;

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("network.metrics_port"));
    }

    #[test]
    fn test_empty_store_url() {
        let mut config = valid_config();
        config.store.base_url = String::new();

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("store.base_url"));
    }

    #[test]
    fn test_unknown_solver_chain() {
        let mut config = valid_config();
        config.solver.chain = "goerli".to_string();

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("solver.chain"));
        assert!(err.to_string().contains("goerli"));
    }

    #[test]
    fn test_duplicate_chain_ids() {
        let mut config = valid_config();
        let mut duplicate = config.chains["sepolia"].clone();
        duplicate.settlement_address = "0x0000000000000000000000000000000000000001".to_string();
        config.chains.insert("sepolia-alt".to_string(), duplicate);

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("duplicate chain_id 11155111"));
    }

    #[test]
    fn test_chain_config_rejects_bad_address() {
        let chain = ChainConfig {
            chain_id: 11155111,
            rpc_url: "https://rpc.sepolia.org".to_string(),
            settlement_address: "52ab74ae4a24b0f3a9cbea11de12eda4b124f8f9".to_string(),
            confirmation_timeout_ms: 120000,
        };

        let err = validate_chain_config(&chain).unwrap_err();
        assert!(err.contains("0x-prefixed"));
    }

    #[test]
    fn test_chain_config_rejects_zero_chain_id() {
        let chain = ChainConfig {
            chain_id: 0,
            rpc_url: "https://rpc.sepolia.org".to_string(),
            settlement_address: "0x52ab74ae4a24b0f3a9cbea11de12eda4b124f8f9".to_string(),
            confirmation_timeout_ms: 120000,
        };

        assert!(validate_chain_config(&chain).is_err());
    }

    #[test]
    fn test_zero_submit_timeout() {
        let mut config = valid_config();
        config.settlement.submit_timeout_ms = 0;

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("settlement.submit_timeout_ms"));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("http://localhost:3001").is_ok());
        assert!(validate_url("https://rpc.sepolia.org").is_ok());
        assert!(validate_url("wss://rpc.sepolia.org").is_ok());
        assert!(validate_url("").is_err());
        assert!(validate_url("localhost:3001").is_err());
        assert!(validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_urls_reports_chain_name() {
        let mut config = valid_config();
        config
            .chains
            .get_mut("mumbai")
            .unwrap()
            .rpc_url = "not-a-url".to_string();

        let err = validate_urls(&config).unwrap_err();
        assert!(err.to_string().contains("chains.mumbai.rpc_url"));
    }

    #[test]
    fn test_multiple_errors_accumulate() {
        let mut config = valid_config();
        config.network.log_level = "loud".to_string();
        config.store.request_timeout_ms = 0;

        let err = validate_config(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("network.log_level"));
        assert!(msg.contains("store.request_timeout_ms"));
    }
}
