//! 搜索错误类型

use thiserror::Error;
use ttt_core::{GameError, Mark};

/// 搜索错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// 棋盘已满，没有可走的格子
    #[error("No legal move: the board is full")]
    NoLegalMove,

    /// AI 与人类使用了同一个标记
    #[error("AI and human cannot both play {mark}")]
    SameMarks { mark: Mark },

    /// 自对弈时落子失败
    #[error("Game error: {0}")]
    Game(#[from] GameError),
}
