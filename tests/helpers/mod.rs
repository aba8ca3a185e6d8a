//! Shared builders for session and battle tests.
#![allow(dead_code)]

use crypto_heroes::{
    Attributes, BattleRecord, Element, GameConfig, GameState, Hero, Rarity, RandomSource,
};

/// Session with no simulated latency and a fixed seed
pub fn instant_state(seed: u64) -> GameState {
    GameState::new(GameConfig::instant().with_seed(seed))
}

/// Connected session without the starter roster
pub fn empty_connected_state(seed: u64) -> GameState {
    let mut state = GameState::new(GameConfig::instant().with_seed(seed).without_sample_data());
    state.connect_wallet().expect("connect");
    state
}

/// Builder for heroes with hand-picked stats
pub struct HeroBuilder {
    hero: Hero,
}

impl HeroBuilder {
    pub fn new(id: &str, element: Element) -> Self {
        Self {
            hero: Hero {
                id: id.to_string(),
                name: id.to_string(),
                image: String::new(),
                owner: "0xtest".to_string(),
                level: 1,
                experience: 0,
                attributes: Attributes::default(),
                rarity: Rarity::Common,
                element,
                battles: BattleRecord::default(),
                minted_at: chrono::Utc::now(),
            },
        }
    }

    pub fn level(mut self, level: u32) -> Self {
        self.hero.level = level;
        self
    }

    pub fn stats(mut self, strength: u32, defense: u32, agility: u32, luck: u32) -> Self {
        self.hero.attributes = Attributes {
            strength,
            defense,
            agility,
            intelligence: 10,
            luck,
        };
        self
    }

    pub fn build(self) -> Hero {
        self.hero
    }
}

/// Never critical (for luck below 90), jitter exactly 1.0
pub struct NeutralRandom {
    next: bool,
    ids: u32,
}

impl NeutralRandom {
    pub fn new() -> Self {
        Self { next: false, ids: 0 }
    }
}

impl RandomSource for NeutralRandom {
    fn next_unit(&mut self) -> f64 {
        // crit roll, then jitter
        self.next = !self.next;
        if self.next { 0.9 } else { 0.5 }
    }

    fn random_id(&mut self) -> String {
        self.ids += 1;
        format!("0x{:040}", self.ids)
    }
}
