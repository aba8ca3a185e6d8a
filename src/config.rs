//! Session configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_NETWORK: &str = "Monad Testnet";
pub const DEFAULT_STARTING_BALANCE: u64 = 100;

/// Tunables for a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the session RNG; `None` draws one from entropy
    pub seed: Option<u64>,
    pub network: String,
    pub starting_balance: u64,
    // Simulated transaction latency
    pub connect_delay: Duration,
    pub mint_delay: Duration,
    pub battle_delay: Duration,
    /// Populate starter heroes and AI opponents on wallet connect
    pub seed_sample_data: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            network: DEFAULT_NETWORK.to_string(),
            starting_balance: DEFAULT_STARTING_BALANCE,
            connect_delay: Duration::from_millis(1000),
            mint_delay: Duration::from_millis(1500),
            battle_delay: Duration::from_millis(2000),
            seed_sample_data: true,
        }
    }
}

impl GameConfig {
    /// Default config with every simulated delay removed
    pub fn instant() -> Self {
        Self {
            connect_delay: Duration::ZERO,
            mint_delay: Duration::ZERO,
            battle_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn without_sample_data(mut self) -> Self {
        self.seed_sample_data = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.network, "Monad Testnet");
        assert_eq!(config.starting_balance, 100);
        assert_eq!(config.battle_delay, Duration::from_secs(2));
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_instant_builder() {
        let config = GameConfig::instant().with_seed(9).without_sample_data();
        assert!(config.mint_delay.is_zero());
        assert_eq!(config.seed, Some(9));
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig::instant().with_seed(3);
        let json = serde_json::to_string(&config).expect("Failed to serialize to JSON");
        let back: GameConfig = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(config, back);
    }
}
