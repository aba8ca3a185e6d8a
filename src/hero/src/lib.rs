// src/hero/src/lib.rs
//! 英雄系统：名字哈希、属性生成、铸造以及战后成长。

// 核心模块
mod core;
mod hash;
mod names;
mod progression;
mod stats;

// 重新导出主要类型
pub use self::{
    core::{BattleRecord, Hero, HeroError, create_hero},
    hash::hash_string,
    names::generate_random_hero_name,
    progression::{apply_battle_results, xp_needed_for_level},
    stats::{
        Attributes, HeroStats, Rarity, element_from_hash, generate_hero_image,
        generate_hero_stats,
    },
};

// 战斗相关类型，方便上层只依赖本 crate
pub use combat::{Element, RandomSource};
