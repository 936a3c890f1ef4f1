//! 获胜连线
//!
//! 8 条固定连线的顺序同时也是多线同时成立时的上报顺序

use serde::{Deserialize, Serialize};

use crate::constants::LINE_COUNT;

/// 获胜连线
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// 在 `LINES` 中的序号 (0-7)，驱动层据此点亮对应的连线图形
    pub ordinal: u8,
    /// 三个格子索引
    pub cells: [usize; 3],
}

/// 所有获胜连线：3 行、3 列、2 条对角线
#[rustfmt::skip]
pub const LINES: [Line; LINE_COUNT] = [
    Line { ordinal: 0, cells: [0, 1, 2] },
    Line { ordinal: 1, cells: [3, 4, 5] },
    Line { ordinal: 2, cells: [6, 7, 8] },
    Line { ordinal: 3, cells: [0, 3, 6] },
    Line { ordinal: 4, cells: [1, 4, 7] },
    Line { ordinal: 5, cells: [2, 5, 8] },
    Line { ordinal: 6, cells: [0, 4, 8] },
    Line { ordinal: 7, cells: [2, 4, 6] },
];

impl Line {
    /// 是否包含指定格子
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.cells;
        write!(f, "{}-{}-{}", a, b, c)
    }
}
