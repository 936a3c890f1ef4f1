//! 井字棋核心库
//!
//! 包含:
//! - 棋子标记、位置、连线等核心数据结构
//! - 棋盘状态与终局判定（胜/和）
//! - AI 难度定义
//! - 棋盘记谱格式
//! - 对局会话（轮次、比分、再来一局）

mod board;
mod constants;
mod difficulty;
mod error;
mod game;
mod line;
mod mark;
mod notation;
mod outcome;

pub use board::Board;
pub use constants::*;
pub use difficulty::Difficulty;
pub use error::{GameError, PlaceError, Result};
pub use game::{GameSession, Scoreboard};
pub use line::{Line, LINES};
pub use mark::{Mark, Position};
pub use notation::{Notation, EMPTY_NOTATION};
pub use outcome::Outcome;
