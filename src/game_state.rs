//! In-memory session store.
//!
//! Owns every hero and battle of the session. The combat and hero crates
//! stay pure: this store looks records up, hands copies to the engine and
//! writes the returned values back.

use combat::{Battle, BattleRng, simulate_battle};
use error::GameError;
use hero::{Hero, HeroError, apply_battle_results, create_hero, generate_random_hero_name};
use tracing::{info, warn};

use crate::config::GameConfig;
use crate::wallet::{WalletInfo, simulate_transaction};

/// Starter heroes minted for the connected wallet
const PLAYER_SAMPLE_HEROES: [&str; 2] = ["Blaze Guardian", "Luna Slayer"];

/// AI opponents as (name, owner)
const AI_SAMPLE_HEROES: [(&str, &str); 3] = [
    ("Aether Knight", "0xAI1"),
    ("Frost Oracle", "0xAI2"),
    ("Terra Phantom", "0xAI3"),
];

pub struct GameState {
    config: GameConfig,
    rng: BattleRng,
    heroes: Vec<Hero>,
    /// Newest first
    battles: Vec<Battle>,
    selected_hero: Option<String>,
    selected_battle: Option<String>,
    wallet: WalletInfo,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let rng = config
            .seed
            .map(BattleRng::new)
            .unwrap_or_else(BattleRng::from_entropy);
        info!(seed = rng.seed(), "game session created");

        Self {
            config,
            rng,
            heroes: Vec::new(),
            battles: Vec::new(),
            selected_hero: None,
            selected_battle: None,
            wallet: WalletInfo::disconnected(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn wallet(&self) -> &WalletInfo {
        &self.wallet
    }

    /// Connect a mock wallet and, if configured, load the starter roster
    pub fn connect_wallet(&mut self) -> Result<&WalletInfo, GameError> {
        simulate_transaction(self.config.connect_delay, &mut self.rng);
        self.wallet = WalletInfo::connect(&self.config, &mut self.rng);
        info!(
            address = %self.wallet.address,
            network = %self.wallet.network,
            "wallet connected"
        );

        if self.config.seed_sample_data {
            self.load_sample_data()?;
        }
        Ok(&self.wallet)
    }

    /// Drop the wallet together with everything the session knew
    pub fn disconnect_wallet(&mut self) {
        info!(address = %self.wallet.address, "wallet disconnected");
        self.wallet = WalletInfo::disconnected();
        self.heroes.clear();
        self.battles.clear();
        self.selected_hero = None;
        self.selected_battle = None;
    }

    fn load_sample_data(&mut self) -> Result<(), GameError> {
        if self.heroes.is_empty() {
            let address = self.wallet.address.clone();
            for name in PLAYER_SAMPLE_HEROES {
                let hero = create_hero(name, &address, &mut self.rng);
                self.heroes.push(hero);
            }
            for (name, owner) in AI_SAMPLE_HEROES {
                let hero = create_hero(name, owner, &mut self.rng);
                self.heroes.push(hero);
            }
        }

        if self.battles.is_empty() && self.heroes.len() >= 2 {
            let first = self.heroes[0].id.clone();
            let last = self.heroes[self.heroes.len() - 1].id.clone();
            self.run_battle(&first, &last)?;
        }
        Ok(())
    }

    /// Mint a hero owned by the connected wallet
    pub fn mint_hero(&mut self, name: &str) -> Result<Hero, GameError> {
        if !self.wallet.connected {
            warn!(name, "mint rejected: wallet not connected");
            return Err(GameError::WalletNotConnected);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(HeroError::EmptyName.into());
        }

        simulate_transaction(self.config.mint_delay, &mut self.rng);
        let hero = create_hero(name, &self.wallet.address, &mut self.rng);
        self.heroes.push(hero.clone());
        Ok(hero)
    }

    /// A name drawn from the session RNG, for callers that did not pick one
    pub fn random_hero_name(&mut self) -> String {
        generate_random_hero_name(&mut self.rng)
    }

    /// Simulate a battle, apply progression and record it as the selected battle
    pub fn initiate_battle(&mut self, hero1_id: &str, hero2_id: &str) -> Result<Battle, GameError> {
        simulate_transaction(self.config.battle_delay, &mut self.rng);
        let battle = self.run_battle(hero1_id, hero2_id)?;
        self.selected_battle = Some(battle.id.clone());
        Ok(battle)
    }

    fn run_battle(&mut self, hero1_id: &str, hero2_id: &str) -> Result<Battle, GameError> {
        let hero1 = self.find_hero(hero1_id)?.clone();
        let hero2 = self.find_hero(hero2_id)?.clone();

        let battle = simulate_battle(&hero1, &hero2, &mut self.rng)?;
        let (updated1, updated2) = apply_battle_results(&battle, hero1, hero2)?;
        self.store_hero(updated1);
        self.store_hero(updated2);

        self.battles.insert(0, battle.clone());
        Ok(battle)
    }

    fn find_hero(&self, id: &str) -> Result<&Hero, GameError> {
        self.hero(id).ok_or_else(|| {
            warn!(hero = id, "hero lookup failed");
            GameError::HeroNotFound(id.to_string())
        })
    }

    fn store_hero(&mut self, hero: Hero) {
        if let Some(slot) = self.heroes.iter_mut().find(|h| h.id == hero.id) {
            *slot = hero;
        }
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn hero(&self, id: &str) -> Option<&Hero> {
        self.heroes.iter().find(|h| h.id == id)
    }

    /// Heroes owned by the connected wallet
    pub fn my_heroes(&self) -> Vec<&Hero> {
        if !self.wallet.connected {
            return Vec::new();
        }
        self.heroes
            .iter()
            .filter(|h| h.owner == self.wallet.address)
            .collect()
    }

    pub fn opponents(&self) -> Vec<&Hero> {
        self.heroes
            .iter()
            .filter(|h| h.owner != self.wallet.address)
            .collect()
    }

    /// Select a hero by id; an unknown id clears the selection
    pub fn select_hero(&mut self, id: &str) -> Result<&Hero, GameError> {
        self.selected_hero = self.hero(id).map(|h| h.id.clone());
        self.find_hero(id)
    }

    pub fn selected_hero(&self) -> Option<&Hero> {
        self.selected_hero.as_deref().and_then(|id| self.hero(id))
    }

    pub fn battles(&self) -> &[Battle] {
        &self.battles
    }

    pub fn battle(&self, id: &str) -> Option<&Battle> {
        self.battles.iter().find(|b| b.id == id)
    }

    /// Battles where either side belongs to the connected wallet
    pub fn user_battles(&self) -> Vec<&Battle> {
        if !self.wallet.connected {
            return Vec::new();
        }
        let address = &self.wallet.address;
        self.battles
            .iter()
            .filter(|b| &b.hero1.owner == address || &b.hero2.owner == address)
            .collect()
    }

    /// Select a battle by id; an unknown id clears the selection
    pub fn select_battle(&mut self, id: &str) -> Result<&Battle, GameError> {
        self.selected_battle = self.battle(id).map(|b| b.id.clone());
        self.battle(id).ok_or_else(|| {
            warn!(battle = id, "battle lookup failed");
            GameError::BattleNotFound(id.to_string())
        })
    }

    pub fn selected_battle(&self) -> Option<&Battle> {
        self.selected_battle.as_deref().and_then(|id| self.battle(id))
    }
}
