// src/combat/src/lib.rs
//! Turn-based battle simulation between two heroes.
//!
//! The engine never mutates its inputs. All randomness (critical rolls,
//! damage jitter, generated ids) comes from the [`RandomSource`] passed in.

pub mod battle;
pub mod combatant;
pub mod element;
pub mod rng;


pub use crate::battle::{Battle, BattleRound, HeroSnapshot};
pub use crate::combatant::Combatant;
pub use crate::element::{Element, element_multiplier};
pub use crate::rng::{BattleRng, RandomSource, is_valid_id};

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

/// Handles battles between two combatants
pub struct Combat;

/// Combat tuning constants
pub mod constants {
    pub const MAX_ROUNDS: u32 = 20; // Hard cap, guarantees termination
    pub const MIN_DAMAGE: u32 = 5;
    pub const CRIT_MULTIPLIER: f64 = 1.5;
    pub const ADVANTAGE_MULTIPLIER: f64 = 1.5;
    pub const DISADVANTAGE_MULTIPLIER: f64 = 0.75;
    pub const DAMAGE_VARIANCE_MIN: f64 = 0.8; // Jitter is drawn from [0.8, 1.2)
    pub const DAMAGE_VARIANCE_SPAN: f64 = 0.4;
    pub const HP_PER_LEVEL: i64 = 100;
    pub const HP_PER_DEFENSE: i64 = 5;
    pub const BASE_EXPERIENCE: f64 = 20.0;
    pub const EXPERIENCE_PER_LEVEL_GAP: f64 = 0.2;
}

/// Rejected battle inputs
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CombatError {
    #[error("combatant id must not be empty")]
    MissingId,
    #[error("combatant {0} cannot battle itself")]
    SameCombatant(String),
    #[error("combatant {id} has invalid level {level}")]
    InvalidLevel { id: String, level: u32 },
}

/// Result of a single resolved attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub damage: u32,
    pub critical: bool,
}

impl Combat {
    /// Run a full battle. See [`simulate_battle`].
    pub fn simulate<C, R>(hero1: &C, hero2: &C, rng: &mut R) -> Result<Battle, CombatError>
    where
        C: Combatant + ?Sized,
        R: RandomSource + ?Sized,
    {
        Self::validate(hero1, hero2)?;

        let battle_id = rng.random_id();
        let fighters: [&C; 2] = [hero1, hero2];
        let mut hp = [hero1.battle_hp(), hero2.battle_hp()];

        // Agility decides who opens; ties go to hero1
        let mut attacker = if Self::hero1_strikes_first(hero1, hero2) {
            0
        } else {
            1
        };

        let mut rounds = Vec::with_capacity(constants::MAX_ROUNDS as usize);
        let mut round = 1;
        while hp[0] > 0 && hp[1] > 0 && round <= constants::MAX_ROUNDS {
            let defender = 1 - attacker;
            let outcome = Self::resolve_attack(fighters[attacker], fighters[defender], rng);

            hp[defender] -= i64::from(outcome.damage);
            let defender_hp_left = hp[defender].max(0) as u64;

            debug!(
                round,
                attacker = fighters[attacker].id(),
                damage = outcome.damage,
                critical = outcome.critical,
                defender_hp_left,
                "round resolved"
            );

            rounds.push(BattleRound {
                round,
                attacker: fighters[attacker].id().to_string(),
                damage: outcome.damage,
                effect_description: Self::describe_attack(
                    fighters[attacker],
                    fighters[defender],
                    outcome,
                ),
                defender_hp_left,
            });

            attacker = defender;
            round += 1;
        }

        // Equal remaining HP (including both at or below zero) favours hero1
        let (winner, loser) = if hp[0] >= hp[1] {
            (hero1, hero2)
        } else {
            (hero2, hero1)
        };
        let experience_gained = Self::experience_for(winner.level(), loser.level());

        info!(
            battle = %battle_id,
            winner = winner.id(),
            loser = loser.id(),
            rounds = rounds.len(),
            experience_gained,
            "battle finished"
        );

        Ok(Battle {
            id: battle_id,
            timestamp: Utc::now(),
            hero1: hero1.snapshot(),
            hero2: hero2.snapshot(),
            winner: winner.id().to_string(),
            loser: loser.id().to_string(),
            rounds,
            experience_gained,
            transaction_hash: rng.random_id(),
        })
    }

    /// Fail fast on inputs that cannot produce a consistent battle
    pub fn validate<C: Combatant + ?Sized>(hero1: &C, hero2: &C) -> Result<(), CombatError> {
        for hero in [hero1, hero2] {
            if hero.id().is_empty() {
                return Err(CombatError::MissingId);
            }
            if hero.level() == 0 {
                return Err(CombatError::InvalidLevel {
                    id: hero.id().to_string(),
                    level: hero.level(),
                });
            }
        }
        if hero1.id() == hero2.id() {
            return Err(CombatError::SameCombatant(hero1.id().to_string()));
        }
        Ok(())
    }

    pub fn hero1_strikes_first<C: Combatant + ?Sized>(hero1: &C, hero2: &C) -> bool {
        hero1.agility() >= hero2.agility()
    }

    /// Roll the critical flag, then the damage jitter, and compute damage
    pub fn resolve_attack<A, D, R>(attacker: &A, defender: &D, rng: &mut R) -> AttackOutcome
    where
        A: Combatant + ?Sized,
        D: Combatant + ?Sized,
        R: RandomSource + ?Sized,
    {
        let critical = rng.roll_chance(attacker.luck());
        let random_factor =
            constants::DAMAGE_VARIANCE_MIN + rng.next_unit() * constants::DAMAGE_VARIANCE_SPAN;
        AttackOutcome {
            damage: Self::calculate_damage(attacker, defender, critical, random_factor),
            critical,
        }
    }

    /// `floor((str*2 - def/2) * crit * element * jitter)`, at least `MIN_DAMAGE`
    pub fn calculate_damage<A, D>(
        attacker: &A,
        defender: &D,
        critical: bool,
        random_factor: f64,
    ) -> u32
    where
        A: Combatant + ?Sized,
        D: Combatant + ?Sized,
    {
        let base_damage = f64::from(attacker.strength()) * 2.0;
        let defense_reduction = f64::from(defender.defense()) / 2.0;
        let crit_multiplier = if critical {
            constants::CRIT_MULTIPLIER
        } else {
            1.0
        };
        let element = element_multiplier(attacker.element(), defender.element());

        let damage =
            ((base_damage - defense_reduction) * crit_multiplier * element * random_factor).floor();
        if damage < f64::from(constants::MIN_DAMAGE) {
            constants::MIN_DAMAGE
        } else {
            damage as u32
        }
    }

    pub fn describe_attack<A, D>(attacker: &A, defender: &D, outcome: AttackOutcome) -> String
    where
        A: Combatant + ?Sized,
        D: Combatant + ?Sized,
    {
        let verb = attacker.element().verb();
        if outcome.critical {
            format!(
                "{}'s critical attack {} {} for {} damage!",
                attacker.name(),
                verb,
                defender.name(),
                outcome.damage
            )
        } else {
            format!(
                "{} {} {} for {} damage",
                attacker.name(),
                verb,
                defender.name(),
                outcome.damage
            )
        }
    }

    /// Beating a higher level opponent pays more; never below the base award
    pub fn experience_for(winner_level: u32, loser_level: u32) -> u32 {
        let level_gap = f64::from(loser_level) - f64::from(winner_level);
        let multiplier = (1.0 + level_gap * constants::EXPERIENCE_PER_LEVEL_GAP).max(1.0);
        (constants::BASE_EXPERIENCE * multiplier).floor() as u32
    }
}

/// Simulate a battle between two heroes.
///
/// Produces between 1 and [`constants::MAX_ROUNDS`] rounds with strictly
/// alternating attackers. The winner is the hero with more HP left at the
/// end; ties go to `hero1`.
pub fn simulate_battle<C, R>(hero1: &C, hero2: &C, rng: &mut R) -> Result<Battle, CombatError>
where
    C: Combatant + ?Sized,
    R: RandomSource + ?Sized,
{
    Combat::simulate(hero1, hero2, rng)
}
