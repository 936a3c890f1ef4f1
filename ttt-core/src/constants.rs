//! 棋盘常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 获胜连线数量（3 行 + 3 列 + 2 条对角线）
pub const LINE_COUNT: usize = 8;

/// 先手方标记（X 永远先走）
pub const FIRST_MARK: crate::Mark = crate::Mark::X;
