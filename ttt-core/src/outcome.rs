//! 对局结果

use serde::{Deserialize, Serialize};

use crate::line::Line;
use crate::mark::Mark;

/// 对局结果（每次都从当前棋盘重新计算，不缓存）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// 进行中
    #[default]
    InProgress,
    /// 某方连成一线获胜
    Win { mark: Mark, line: Line },
    /// 棋盘下满且无人连线
    Draw,
}

impl Outcome {
    /// 是否为终局（胜或和）
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// 获胜方
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win { mark, line } => write!(f, "{} wins ({})", mark, line),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
