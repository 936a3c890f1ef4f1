//! 棋盘记谱格式
//!
//! 三行从上到下，用 `/` 分隔，空格用 `-`（解析时也接受 `.`）：
//! `<第一行>/<第二行>/<第三行>`
//!
//! 示例：
//! `XOX/XOO/OXX`

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::error::GameError;
use crate::mark::Mark;

/// 空棋盘记谱
pub const EMPTY_NOTATION: &str = "---/---/---";

/// 记谱格式处理
pub struct Notation;

impl Notation {
    /// 解析记谱字符串为棋盘
    ///
    /// 只接受轮流落子可达的子数：X 与 O 相等，或 X 多一枚。
    pub fn parse(notation: &str) -> Result<Board, GameError> {
        let rows: Vec<&str> = notation.trim().split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(GameError::InvalidNotation {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut board = Board::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(GameError::InvalidNotation {
                    reason: format!(
                        "Row {} has {} columns, expected {}",
                        row_idx,
                        chars.len(),
                        BOARD_SIZE
                    ),
                });
            }

            for (col, c) in chars.into_iter().enumerate() {
                if c == '-' || c == '.' {
                    continue;
                }
                let mark = Mark::from_char(c).ok_or_else(|| GameError::InvalidNotation {
                    reason: format!("Invalid cell character: {}", c),
                })?;
                board.place(row_idx * BOARD_SIZE + col, mark)?;
            }
        }

        let count = |mark| board.cells().iter().filter(|&&cell| cell == Some(mark)).count();
        let (x, o) = (count(Mark::X), count(Mark::O));
        if x < o || x > o + 1 {
            return Err(GameError::InvalidNotation {
                reason: format!("Unreachable mark counts: {} X, {} O", x, o),
            });
        }

        Ok(board)
    }

    /// 将棋盘转换为记谱字符串
    pub fn format(board: &Board) -> String {
        board
            .cells()
            .chunks(BOARD_SIZE)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(|m| m.to_char()).unwrap_or('-'))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}
