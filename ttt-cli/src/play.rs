//! 终端人机对弈
//!
//! 人类输入在这里过滤为合法格子后才交给 `GameSession`

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;
use ttt_ai::{AiConfig, AiEngine};
use ttt_core::{GameSession, Outcome, Position, CELL_COUNT};

use crate::settings::Settings;

/// 一行输入的含义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// 落子到指定格子索引
    Cell(usize),
    /// 退出
    Quit,
}

/// 解析玩家输入
///
/// 支持 `1`-`9`（与棋盘显示编号一致）或 `行,列`（均从 1 开始）。
pub fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Some(Input::Quit);
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    match parts.as_slice() {
        [cell] => {
            let n: usize = cell.parse().ok()?;
            (1..=CELL_COUNT).contains(&n).then(|| Input::Cell(n - 1))
        }
        [row, col] => {
            let row: u8 = row.parse().ok()?;
            let col: u8 = col.parse().ok()?;
            let pos = Position::new(row.checked_sub(1)?, col.checked_sub(1)?)?;
            Some(Input::Cell(pos.to_index()))
        }
        _ => None,
    }
}

/// 运行人机对弈，直到玩家退出或输入结束
pub fn run<R: BufRead, W: Write>(settings: &Settings, input: R, output: &mut W) -> Result<()> {
    let human = settings.human_mark;
    let ai = settings.ai_mark();
    let mut engine = AiEngine::new(AiConfig {
        difficulty: settings.difficulty,
        seed: settings.seed,
    });
    let mut session = GameSession::new();
    let mut lines = input.lines();

    info!("开始人机对弈: 人类 {}，AI {}（{}）", human, ai, settings.difficulty);
    writeln!(
        output,
        "You are {}. AI plays {} on {}. Enter 1-9 or row,col; q to quit.",
        human, ai, settings.difficulty
    )?;

    loop {
        while !session.outcome().is_terminal() {
            if session.active_mark() == ai {
                let index = engine.search(session.board(), ai)?;
                session.play(index)?;
                writeln!(output, "AI plays {}", index + 1)?;
                continue;
            }

            write!(output, "\n{}\nYour move ({}): ", session.board(), human)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line.context("读取输入失败")?;

            match parse_input(&line) {
                Some(Input::Quit) => return Ok(()),
                Some(Input::Cell(index)) if session.board().get(index).is_none() => {
                    session.play(index)?;
                }
                Some(Input::Cell(index)) => {
                    writeln!(output, "Cell {} is taken.", index + 1)?;
                }
                None => {
                    writeln!(output, "Enter 1-9, row,col or q.")?;
                }
            }
        }

        let score = session.scoreboard();
        writeln!(output, "\n{}", session.board())?;
        match session.outcome() {
            Outcome::Win { mark, .. } if mark == human => writeln!(output, "You win!")?,
            Outcome::Win { .. } => writeln!(output, "AI wins.")?,
            _ => writeln!(output, "Draw.")?,
        }
        writeln!(
            output,
            "Score  X {} : O {}  (draws {})",
            score.x_wins, score.o_wins, score.draws
        )?;
        write!(output, "Rematch? [y = rematch, r = restart scores, other = quit]: ")?;
        output.flush()?;

        let answer = match lines.next() {
            Some(line) => line.context("读取输入失败")?,
            None => return Ok(()),
        };
        match answer.trim() {
            "y" | "Y" => session.rematch(),
            "r" | "R" => session.restart(),
            _ => return Ok(()),
        }
    }
}
