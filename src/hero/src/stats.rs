//src/hero/src/stats.rs
use combat::Element;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::debug;

use crate::hash::hash_string;

/// 稀有度（有序，越高属性倍率越大）
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Rarity {
    Common,    // 50%
    Uncommon,  // 25%
    Rare,      // 15%
    Epic,      // 9%
    Legendary, // 1%
}

impl Rarity {
    /// 根据 `hash % 100` 的结果确定稀有度
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            99.. => Rarity::Legendary,
            90..=98 => Rarity::Epic,
            75..=89 => Rarity::Rare,
            50..=74 => Rarity::Uncommon,
            _ => Rarity::Common,
        }
    }

    /// 属性倍率
    pub fn multiplier(self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.2,
            Rarity::Rare => 1.5,
            Rarity::Epic => 1.8,
            Rarity::Legendary => 2.2,
        }
    }
}

/// 英雄五项基础属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: u32,
    pub defense: u32,
    pub agility: u32,
    pub intelligence: u32,
    pub luck: u32,
}

/// 由名字推导出的全部属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroStats {
    pub attributes: Attributes,
    pub rarity: Rarity,
    pub element: Element,
}

/// 元素选择：`(hash % 7) % 6`，保留原有公式（火元素略多）
pub fn element_from_hash(hash: u32) -> Element {
    Element::ALL[((hash % 7) % Element::ALL.len() as u32) as usize]
}

/// 根据名字哈希生成稀有度、元素和五项属性。
///
/// 纯函数：同一个名字永远得到同样的结果。
pub fn generate_hero_stats(name: &str) -> HeroStats {
    let hash = hash_string(name);
    let rarity = Rarity::from_roll(hash % 100);
    let element = element_from_hash(hash);

    // 基础值 10-19，每项属性再加上 `hash / place` 的浮点余数（保留小数部分），
    // 只在乘以稀有度倍率之后取整
    let stats_base = f64::from((hash % 1000) / 100 + 10);
    let multiplier = rarity.multiplier();
    let attribute = |place: u32| {
        let jitter = (f64::from(hash) / f64::from(place)) % 10.0;
        ((stats_base + jitter) * multiplier).floor() as u32
    };

    let attributes = Attributes {
        strength: attribute(1),
        defense: attribute(10),
        agility: attribute(100),
        intelligence: attribute(1_000),
        luck: attribute(10_000),
    };

    debug!(name, hash, %rarity, %element, "generated hero stats");

    HeroStats {
        attributes,
        rarity,
        element,
    }
}

/// 生成英雄头像地址（仅装饰用途）
pub fn generate_hero_image(seed: &str) -> String {
    format!("https://robohash.org/{seed}.png?set=set4&size=250x250")
}
