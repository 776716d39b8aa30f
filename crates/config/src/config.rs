//! Core configuration structures for the CoW intent solver.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Network environment and observability settings
    pub network: NetworkConfig,

    /// Intent store backend
    pub store: StoreConfig,

    /// Chain configurations by name (e.g. "sepolia", "mumbai")
    #[serde(default)]
    pub chains: HashMap<String, ChainConfig>,

    /// Solver behavior
    pub solver: SolverConfig,

    /// Settlement executor settings
    pub settlement: SettlementConfig,
}

impl AppConfig {
    /// Chain entry the solver settles on, if configured.
    pub fn solver_chain(&self) -> Option<&ChainConfig> {
        self.chains.get(&self.solver.chain)
    }
}

/// Network environment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Environment type (mainnet, testnet, local)
    pub environment: Environment,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable metrics collection
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Metrics server port
    #[serde(default = "default_metrics_port")]
    pub metrics_port: u16,
}

/// Environment types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Mainnet,
    Testnet,
    Local,
}

/// Intent store backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the intent backend
    #[serde(default = "default_store_url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

/// Configuration for one settlement chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Numeric chain identifier (e.g. 11155111 for Sepolia)
    pub chain_id: u64,

    /// RPC endpoint URL
    pub rpc_url: String,

    /// Settlement contract address on this chain
    pub settlement_address: String,

    /// Confirmation wait ceiling in milliseconds
    #[serde(default = "default_confirmation_timeout_ms")]
    pub confirmation_timeout_ms: u64,
}

/// Solver behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Name of the chain entry this solver settles on
    pub chain: String,
}

/// Settlement executor settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementConfig {
    /// Ceiling on one submission plus its confirmation wait, in
    /// milliseconds
    #[serde(default = "default_submit_timeout_ms")]
    pub submit_timeout_ms: u64,

    /// Append-only journal of settled matches (JSON lines); disabled when
    /// unset
    #[serde(default)]
    pub journal_path: Option<String>,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_metrics_port() -> u16 {
    9090
}

fn default_store_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10000 // 10 seconds
}

fn default_confirmation_timeout_ms() -> u64 {
    120000 // 2 minutes
}

fn default_submit_timeout_ms() -> u64 {
    120000 // 2 minutes
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            log_level: default_log_level(),
            metrics_enabled: default_true(),
            metrics_port: default_metrics_port(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_store_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            chain: String::new(),
        }
    }
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            submit_timeout_ms: default_submit_timeout_ms(),
            journal_path: None,
        }
    }
}
