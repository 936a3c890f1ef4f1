//! 井字棋 AI 引擎
//!
//! 包含:
//! - 终局评估
//! - Minimax + Alpha-Beta 穷举搜索
//! - 按难度随机接受次优候选
//! - 引擎自对弈

mod arena;
mod error;
mod evaluate;
mod search;

pub use arena::{Arena, PlayedGame};
pub use error::SearchError;
pub use evaluate::{Evaluator, ALPHA_INIT, BETA_INIT, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
pub use search::{AiConfig, AiEngine};

// 重导出 Difficulty 以便外部使用
pub use ttt_core::Difficulty;
