//! 游戏错误处理模块
//!
//! 汇总会话层可能出现的错误：钱包状态、英雄/战斗查找、战斗与成长的输入校验，
//! 以及输出报告时的 IO 和序列化错误。

use combat::CombatError;
use hero::HeroError;
use thiserror::Error;

/// 游戏运行过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// 钱包未连接
    #[error("Wallet is not connected")]
    WalletNotConnected,

    /// 找不到英雄
    #[error("Hero not found: {0}")]
    HeroNotFound(String),

    /// 找不到战斗记录
    #[error("Battle not found: {0}")]
    BattleNotFound(String),

    /// 战斗输入无效
    #[error("Combat error: {0}")]
    Combat(#[from] CombatError),

    /// 成长结算错误
    #[error("Hero error: {0}")]
    Hero(#[from] HeroError),

    /// IO操作错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::WalletNotConnected => "Connect your wallet first".to_string(),
        GameError::HeroNotFound(_) => "One or both heroes not found".to_string(),
        GameError::BattleNotFound(_) => "Battle not found".to_string(),
        GameError::Combat(CombatError::SameCombatant(_)) => {
            "A hero cannot battle itself".to_string()
        }
        GameError::Hero(HeroError::EmptyName) => "Please enter a hero name".to_string(),
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::BrokenPipe => "Output closed".to_string(),
            _ => format!("IO error: {}", e),
        },
        _ => error.to_string(),
    }
}
