// src/combat/src/combatant.rs

use crate::battle::HeroSnapshot;
use crate::constants::{HP_PER_DEFENSE, HP_PER_LEVEL};
use crate::element::Element;

/// 可以参加战斗的英雄
pub trait Combatant {
    /// 唯一标识
    fn id(&self) -> &str;

    /// 显示名称
    fn name(&self) -> &str;

    /// 所有者地址
    fn owner(&self) -> &str;

    /// 当前等级
    fn level(&self) -> u32;

    fn strength(&self) -> u32;

    fn defense(&self) -> u32;

    /// 决定出手顺序
    fn agility(&self) -> u32;

    /// 暴击概率（百分比）
    fn luck(&self) -> u32;

    fn element(&self) -> Element;

    /// 战斗开始时的生命值
    fn battle_hp(&self) -> i64 {
        i64::from(self.level()) * HP_PER_LEVEL + i64::from(self.defense()) * HP_PER_DEFENSE
    }

    /// 战斗记录中保存的身份快照
    fn snapshot(&self) -> HeroSnapshot {
        HeroSnapshot {
            id: self.id().to_string(),
            name: self.name().to_string(),
            owner: self.owner().to_string(),
        }
    }
}
