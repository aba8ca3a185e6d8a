// src/combat/src/battle.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of a participant captured when the battle ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSnapshot {
    pub id: String,
    pub name: String,
    pub owner: String,
}

/// One resolved attack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRound {
    pub round: u32, // 1-based
    pub attacker: String,
    pub damage: u32,
    pub effect_description: String,
    pub defender_hp_left: u64, // clamped at 0
}

/// Complete record of a simulated battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battle {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub hero1: HeroSnapshot,
    pub hero2: HeroSnapshot,
    pub winner: String,
    pub loser: String,
    pub rounds: Vec<BattleRound>,
    pub experience_gained: u32,
    pub transaction_hash: String,
}

impl Battle {
    pub fn winner_snapshot(&self) -> &HeroSnapshot {
        if self.hero1.id == self.winner {
            &self.hero1
        } else {
            &self.hero2
        }
    }

    pub fn loser_snapshot(&self) -> &HeroSnapshot {
        if self.hero1.id == self.loser {
            &self.hero1
        } else {
            &self.hero2
        }
    }

    /// Whether the hero took part in this battle
    pub fn involves(&self, hero_id: &str) -> bool {
        self.hero1.id == hero_id || self.hero2.id == hero_id
    }

    /// Total damage the hero dealt over all of its rounds
    pub fn damage_dealt_by(&self, hero_id: &str) -> u64 {
        self.rounds
            .iter()
            .filter(|r| r.attacker == hero_id)
            .map(|r| u64::from(r.damage))
            .sum()
    }
}
