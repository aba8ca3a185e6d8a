//! Crypto hero battler: mint heroes whose stats come from their names and
//! pit them against each other in simulated turn-based battles.

pub mod config;
pub mod format;
pub mod game_state;
pub mod report;
pub mod wallet;

pub use crate::config::GameConfig;
pub use crate::game_state::GameState;
pub use crate::wallet::WalletInfo;

pub use combat::{
    Battle, BattleRng, BattleRound, Combat, CombatError, Combatant, Element, HeroSnapshot,
    RandomSource, element_multiplier, simulate_battle,
};
pub use error::{GameError, handle_error};
pub use hero::{
    Attributes, BattleRecord, Hero, HeroError, Rarity, apply_battle_results, create_hero,
    generate_hero_stats, hash_string, xp_needed_for_level,
};
