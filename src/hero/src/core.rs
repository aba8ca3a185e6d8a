// src/hero/core.rs
use chrono::{DateTime, Utc};
use combat::{Combatant, CombatError, Element, RandomSource};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::progression::xp_needed_for_level;
use crate::stats::{Attributes, Rarity, generate_hero_image, generate_hero_stats};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeroError {
    #[error("hero name must not be empty")]
    EmptyName,
    #[error("battle result (winner {winner}, loser {loser}) does not match these heroes")]
    BattleMismatch { winner: String, loser: String },
    #[error(transparent)]
    Combat(#[from] CombatError),
}

/// 胜负记录
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub wins: u32,
    pub losses: u32,
}

/// 英雄核心数据结构
///
/// 稀有度、元素和属性在铸造时由名字决定，之后不再改变；
/// 战斗只会影响经验、等级和胜负记录。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    // 身份
    pub id: String,
    pub name: String,
    pub image: String,
    pub owner: String,

    // 成长系统
    pub level: u32,
    pub experience: u64,

    pub attributes: Attributes,
    pub rarity: Rarity,
    pub element: Element,

    pub battles: BattleRecord,
    pub minted_at: DateTime<Utc>,
}

impl Hero {
    /// 总战斗场数
    pub fn total_battles(&self) -> u32 {
        self.battles.wins + self.battles.losses
    }

    /// 胜率（四舍五入的百分比，没有战斗时为0）
    pub fn win_rate(&self) -> u32 {
        match self.total_battles() {
            0 => 0,
            total => (f64::from(self.battles.wins) / f64::from(total) * 100.0).round() as u32,
        }
    }

    /// 距离升级还差多少经验
    pub fn xp_to_next_level(&self) -> u64 {
        xp_needed_for_level(self.level).saturating_sub(self.experience)
    }

    /// 记录一场胜利并增加经验，返回是否升级。
    ///
    /// 每场战斗最多升一级，即使经验已经超过多个等级的门槛。
    pub fn record_win(&mut self, experience: u32) -> bool {
        self.battles.wins += 1;
        self.experience += u64::from(experience);

        if self.experience >= xp_needed_for_level(self.level) {
            self.level += 1;
            info!(hero = %self.id, level = self.level, "hero levelled up");
            true
        } else {
            false
        }
    }

    pub fn record_loss(&mut self) {
        self.battles.losses += 1;
    }
}

/// 铸造新英雄：随机 id，属性由名字决定，等级1，无经验无战绩
pub fn create_hero<R>(name: &str, owner: &str, rng: &mut R) -> Hero
where
    R: RandomSource + ?Sized,
{
    let stats = generate_hero_stats(name);
    let id = rng.random_id();

    let hero = Hero {
        image: generate_hero_image(&format!("{name}{id}")),
        id,
        name: name.to_string(),
        owner: owner.to_string(),
        level: 1,
        experience: 0,
        attributes: stats.attributes,
        rarity: stats.rarity,
        element: stats.element,
        battles: BattleRecord::default(),
        minted_at: Utc::now(),
    };

    info!(
        hero = %hero.id,
        name,
        owner,
        rarity = %hero.rarity,
        element = %hero.element,
        "hero minted"
    );
    hero
}

impl Combatant for Hero {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn owner(&self) -> &str {
        &self.owner
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn strength(&self) -> u32 {
        self.attributes.strength
    }

    fn defense(&self) -> u32 {
        self.attributes.defense
    }

    fn agility(&self) -> u32 {
        self.attributes.agility
    }

    fn luck(&self) -> u32 {
        self.attributes.luck
    }

    fn element(&self) -> Element {
        self.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat::{BattleRng, is_valid_id};

    #[test]
    fn test_create_hero_baseline() {
        let mut rng = BattleRng::new(11);
        let hero = create_hero("Blaze Guardian", "0xowner", &mut rng);

        assert!(is_valid_id(&hero.id));
        assert_eq!(hero.name, "Blaze Guardian");
        assert_eq!(hero.owner, "0xowner");
        assert_eq!(hero.level, 1);
        assert_eq!(hero.experience, 0);
        assert_eq!(hero.battles, BattleRecord::default());
        assert_eq!(hero.rarity, Rarity::Common);
        assert_eq!(hero.element, Element::Air);
        assert_eq!(hero.attributes, generate_hero_stats("Blaze Guardian").attributes);
        assert_eq!(
            hero.image,
            format!(
                "https://robohash.org/Blaze Guardian{}.png?set=set4&size=250x250",
                hero.id
            )
        );
    }

    #[test]
    fn test_same_name_same_stats_different_ids() {
        let mut rng = BattleRng::new(12);
        let first = create_hero("Nova lord", "0x1", &mut rng);
        let second = create_hero("Nova lord", "0x2", &mut rng);

        assert_ne!(first.id, second.id);
        assert_eq!(first.attributes, second.attributes);
        assert_eq!(first.rarity, second.rarity);
        assert_eq!(first.element, second.element);
    }

    #[test]
    fn test_win_rate() {
        let mut hero = create_hero("Luna Slayer", "0x1", &mut BattleRng::new(1));
        assert_eq!(hero.win_rate(), 0);
        hero.battles = BattleRecord { wins: 2, losses: 1 };
        assert_eq!(hero.total_battles(), 3);
        assert_eq!(hero.win_rate(), 67);
    }

    #[test]
    fn test_record_win_levels_once() {
        let mut hero = create_hero("Luna Slayer", "0x1", &mut BattleRng::new(1));
        assert_eq!(hero.xp_to_next_level(), 100);

        assert!(!hero.record_win(60));
        assert_eq!(hero.level, 1);
        assert_eq!(hero.xp_to_next_level(), 40);

        assert!(hero.record_win(1_000));
        assert_eq!(hero.level, 2);
        assert_eq!(hero.experience, 1_060);
        assert_eq!(hero.battles.wins, 2);
    }

    #[test]
    fn test_json_uses_lowercase_tags() {
        let hero = create_hero("Luna Slayer", "0x1", &mut BattleRng::new(2));
        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(json["rarity"], "epic");
        assert_eq!(json["element"], "light");
        assert_eq!(json["attributes"]["defense"], 51);

        let back: Hero = serde_json::from_value(json).unwrap();
        assert_eq!(back, hero);
    }

    #[test]
    fn test_combatant_view() {
        let hero = create_hero("Aether Knight", "0xAI1", &mut BattleRng::new(4));
        assert_eq!(Combatant::strength(&hero), 21);
        assert_eq!(Combatant::defense(&hero), 21);
        assert_eq!(hero.agility(), 17);
        assert_eq!(hero.luck(), 21);
        assert_eq!(hero.battle_hp(), 100 + 21 * 5);
        assert_eq!(hero.snapshot().owner, "0xAI1");
    }
}
