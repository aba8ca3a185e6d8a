//! Plain-text rendering of heroes and battles for the command line.

use combat::Battle;
use error::GameError;
use hero::{Hero, xp_needed_for_level};
use std::fmt::Write;
use std::io;

use crate::format::{format_address, format_id, format_number};

pub const EXPLORER_TX_URL: &str = "https://monad-explorer.com/tx/";

pub fn render_hero(hero: &Hero) -> String {
    let mut out = String::new();
    let a = &hero.attributes;
    let _ = writeln!(
        out,
        "{} [{} {}] Lv.{}",
        hero.name, hero.rarity, hero.element, hero.level
    );
    let _ = writeln!(out, "  Owner: {}", format_address(&hero.owner));
    let _ = writeln!(
        out,
        "  Experience: {} / {}",
        format_number(hero.experience),
        format_number(xp_needed_for_level(hero.level))
    );
    let _ = writeln!(
        out,
        "  STR {}  DEF {}  AGI {}  INT {}  LCK {}",
        a.strength, a.defense, a.agility, a.intelligence, a.luck
    );
    let _ = writeln!(
        out,
        "  Record: {}W / {}L ({}% win rate)",
        hero.battles.wins,
        hero.battles.losses,
        hero.win_rate()
    );
    let _ = write!(out, "  ID: {}", format_id(&hero.id));
    out
}

pub fn render_battle(battle: &Battle) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}) vs {} ({})",
        battle.hero1.name,
        format_address(&battle.hero1.owner),
        battle.hero2.name,
        format_address(&battle.hero2.owner)
    );
    let _ = writeln!(
        out,
        "Battle {} at {}",
        format_id(&battle.id),
        battle.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
    for round in &battle.rounds {
        let _ = writeln!(
            out,
            "  Round {:>2}: {} (HP left: {})",
            round.round, round.effect_description, round.defender_hp_left
        );
    }
    let _ = writeln!(
        out,
        "Winner: {} (+{} XP)",
        battle.winner_snapshot().name,
        battle.experience_gained
    );
    let _ = write!(out, "Transaction: {EXPLORER_TX_URL}{}", battle.transaction_hash);
    out
}

/// Write a battle as pretty JSON or as the text report
pub fn write_battle<W: io::Write>(out: &mut W, battle: &Battle, json: bool) -> Result<(), GameError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, battle)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}\n", render_battle(battle))?;
    }
    Ok(())
}
