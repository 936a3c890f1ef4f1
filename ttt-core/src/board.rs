//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT, FIRST_MARK};
use crate::error::PlaceError;
use crate::line::{Line, LINES};
use crate::mark::Mark;
use crate::outcome::Outcome;

/// 棋盘
///
/// 反序列化经过 `RawBoard` 校验：落子数必须等于非空格子数。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    /// 3x3 棋盘，索引为 row * 3 + col
    cells: [Option<Mark>; CELL_COUNT],
    /// 已落子数（= 非空格子数）
    turns_played: usize,
}

/// 未校验的序列化形式
#[derive(Deserialize)]
struct RawBoard {
    cells: [Option<Mark>; CELL_COUNT],
    #[serde(default)]
    turns_played: Option<usize>,
}

impl TryFrom<RawBoard> for Board {
    type Error = String;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let filled = raw.cells.iter().filter(|cell| cell.is_some()).count();
        match raw.turns_played {
            Some(turns) if turns != filled => Err(format!(
                "turns_played is {} but {} cells are filled",
                turns, filled
            )),
            _ => Ok(Self {
                cells: raw.cells,
                turns_played: filled,
            }),
        }
    }
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self::default()
    }

    /// 获取指定格子的标记（越界返回 None）
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// 所有格子
    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// 落子
    ///
    /// 先检查越界，再检查占用。本方法只修改状态，不计算对局结果。
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), PlaceError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(PlaceError::OutOfRange { index })?;

        if cell.is_some() {
            return Err(PlaceError::OccupiedCell { index });
        }

        *cell = Some(mark);
        self.turns_played += 1;
        Ok(())
    }

    /// 撤回一个试探性落子
    ///
    /// 仅供搜索使用的草稿棋盘调用，权威棋盘只能通过 `reset` 清空。
    pub fn withdraw(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            if cell.take().is_some() {
                self.turns_played -= 1;
            }
        }
    }

    /// 连线上三格是否都是指定标记
    pub fn evaluate_line(&self, line: &Line, mark: Mark) -> bool {
        line.cells.iter().all(|&i| self.cells[i] == Some(mark))
    }

    /// 查找指定标记完成的第一条连线（按固定顺序）
    pub fn check_win(&self, mark: Mark) -> Option<Line> {
        LINES.iter().find(|line| self.evaluate_line(line, mark)).copied()
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// 所有空格索引（升序）
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// 清空棋盘
    pub fn reset(&mut self) {
        self.cells = [None; CELL_COUNT];
        self.turns_played = 0;
    }

    /// 已落子数
    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// 下一步该谁落子（X 先手，之后严格交替）
    pub fn active_mark(&self) -> Mark {
        if self.turns_played % 2 == 0 {
            FIRST_MARK
        } else {
            FIRST_MARK.opponent()
        }
    }

    /// 计算当前对局结果
    pub fn outcome(&self) -> Outcome {
        for mark in [Mark::X, Mark::O] {
            if let Some(line) = self.check_win(mark) {
                return Outcome::Win { mark, line };
            }
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let cells: Vec<String> = (0..BOARD_SIZE)
                .map(|col| {
                    let index = row * BOARD_SIZE + col;
                    match self.cells[index] {
                        Some(mark) => format!(" {} ", mark),
                        // 空格显示 1-9 编号，方便输入
                        None => format!(" {} ", index + 1),
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}
