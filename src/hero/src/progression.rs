//src/hero/src/progression.rs
use combat::Battle;

use crate::core::{Hero, HeroError};

/// 升到下一级所需的累计经验：`floor(100 * level * 1.5^(level-1))`
pub fn xp_needed_for_level(level: u32) -> u64 {
    let exponent = i32::try_from(level).unwrap_or(i32::MAX).saturating_sub(1);
    (100.0 * f64::from(level) * 1.5f64.powi(exponent)).floor() as u64
}

/// 把战斗结果写回两名参战英雄。
///
/// 按 id 匹配胜者和败者，胜者 +1 胜场并获得经验（达到门槛时只升一级），
/// 败者 +1 败场。返回顺序与传入顺序一致，而不是胜负顺序。
pub fn apply_battle_results(
    battle: &Battle,
    mut hero1: Hero,
    mut hero2: Hero,
) -> Result<(Hero, Hero), HeroError> {
    let hero1_won = battle.winner == hero1.id && battle.loser == hero2.id;
    let hero2_won = battle.winner == hero2.id && battle.loser == hero1.id;
    if !hero1_won && !hero2_won {
        return Err(HeroError::BattleMismatch {
            winner: battle.winner.clone(),
            loser: battle.loser.clone(),
        });
    }

    let (winner, loser) = if hero1_won {
        (&mut hero1, &mut hero2)
    } else {
        (&mut hero2, &mut hero1)
    };
    winner.record_win(battle.experience_gained);
    loser.record_loss();

    Ok((hero1, hero2))
}
