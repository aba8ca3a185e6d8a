//! Locally simulated wallet and transactions. Nothing leaves the process.

use combat::RandomSource;
use serde::{Deserialize, Serialize};
use std::{thread, time::Duration};
use tracing::debug;

use crate::config::GameConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub address: String,
    pub balance: u64,
    pub connected: bool,
    pub network: String,
}

impl WalletInfo {
    /// A freshly "connected" wallet with a random address
    pub fn connect<R: RandomSource + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        Self {
            address: rng.random_id(),
            balance: config.starting_balance,
            connected: true,
            network: config.network.clone(),
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }
}

/// Wait out the configured latency and hand back a transaction hash
pub fn simulate_transaction<R: RandomSource + ?Sized>(delay: Duration, rng: &mut R) -> String {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
    let tx = rng.random_id();
    debug!(%tx, delay_ms = delay.as_millis() as u64, "transaction confirmed");
    tx
}
