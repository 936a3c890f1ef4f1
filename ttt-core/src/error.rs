//! 错误类型定义

use thiserror::Error;

use crate::constants::CELL_COUNT;

/// 落子错误
///
/// 都属于调用方违约：驱动层应在调用 `place` 之前过滤非法走法
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// 格子索引越界
    #[error("Cell index {index} is out of range (0..{max})", max = CELL_COUNT)]
    OutOfRange { index: usize },

    /// 格子已被占用
    #[error("Cell {index} is already occupied")]
    OccupiedCell { index: usize },
}

/// 对局错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 落子失败
    #[error("Place error: {0}")]
    Place(#[from] PlaceError),

    /// 对局已结束（需要先 rematch / restart）
    #[error("Game is already over")]
    GameOver,

    /// 无效的记谱字符串
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },
}

/// 对局操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
