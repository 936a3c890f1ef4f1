//! 对局控制
//!
//! 包含轮次交替、终局判定后的计分、再来一局与重新开始

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::error::{GameError, Result};
use crate::mark::Mark;
use crate::outcome::Outcome;

/// 比分
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// X 获胜局数
    pub x_wins: u32,
    /// O 获胜局数
    pub o_wins: u32,
    /// 和棋局数
    pub draws: u32,
}

impl Scoreboard {
    /// 记录一局结果（进行中的对局不计分）
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Win { mark: Mark::X, .. } => self.x_wins += 1,
            Outcome::Win { mark: Mark::O, .. } => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// 指定方的获胜局数
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// 总局数
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// 对局会话
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    /// 权威棋盘
    board: Board,
    /// 最近一次落子后的结果
    outcome: Outcome,
    /// 本局落子顺序（仅用于显示）
    history: Vec<usize>,
    /// 比分（rematch 保留，restart 清零）
    scoreboard: Scoreboard,
}

impl GameSession {
    /// 创建新会话（X 先手）
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前走子方落子
    ///
    /// 终局后必须先 `rematch` / `restart`。
    pub fn play(&mut self, index: usize) -> Result<Outcome> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }

        let mark = self.board.active_mark();
        self.board.place(index, mark)?;
        self.history.push(index);
        debug!("{} 落子于 {}", mark, index);

        self.outcome = self.board.outcome();
        if self.outcome.is_terminal() {
            self.scoreboard.record(&self.outcome);
            info!(
                "对局结束: {}，比分 X {} : O {}（和 {}）",
                self.outcome, self.scoreboard.x_wins, self.scoreboard.o_wins, self.scoreboard.draws
            );
        }

        Ok(self.outcome)
    }

    /// 再来一局（保留比分）
    pub fn rematch(&mut self) {
        self.board.reset();
        self.history.clear();
        self.outcome = Outcome::InProgress;
    }

    /// 重新开始（清空棋盘和比分）
    pub fn restart(&mut self) {
        self.rematch();
        self.scoreboard = Scoreboard::default();
    }

    /// 当前走子方
    pub fn active_mark(&self) -> Mark {
        self.board.active_mark()
    }

    /// 当前棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 当前结果
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// 比分
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// 本局落子顺序
    pub fn history(&self) -> &[usize] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaceError;
    use crate::line::LINES;

    fn play_all(session: &mut GameSession, moves: &[usize]) -> Outcome {
        let mut outcome = Outcome::InProgress;
        for &index in moves {
            outcome = session.play(index).unwrap();
        }
        outcome
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = GameSession::new();
        assert_eq!(session.active_mark(), Mark::X);
        session.play(4).unwrap();
        assert_eq!(session.active_mark(), Mark::O);
        session.play(0).unwrap();
        assert_eq!(session.active_mark(), Mark::X);
        assert_eq!(session.board().get(4), Some(Mark::X));
        assert_eq!(session.board().get(0), Some(Mark::O));
        assert_eq!(session.history(), &[4, 0]);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut session = GameSession::new();
        session.play(4).unwrap();
        assert_eq!(
            session.play(4),
            Err(GameError::Place(PlaceError::OccupiedCell { index: 4 }))
        );
        assert_eq!(
            session.play(12),
            Err(GameError::Place(PlaceError::OutOfRange { index: 12 }))
        );
        assert_eq!(session.active_mark(), Mark::O);
    }

    #[test]
    fn test_win_records_score_and_blocks_moves() {
        let mut session = GameSession::new();
        // X: 0 1 2，O: 3 4
        let outcome = play_all(&mut session, &[0, 3, 1, 4, 2]);
        assert_eq!(outcome, Outcome::Win { mark: Mark::X, line: LINES[0] });
        assert_eq!(session.scoreboard().x_wins, 1);
        assert_eq!(session.play(8), Err(GameError::GameOver));
    }

    #[test]
    fn test_draw_is_recorded() {
        let mut session = GameSession::new();
        // 终局 XOX/XOO/OXX
        let outcome = play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(session.scoreboard().draws, 1);
    }

    #[test]
    fn test_rematch_keeps_score_restart_clears() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 3, 1, 4, 2]);

        session.rematch();
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.board(), &Board::empty());
        assert_eq!(session.active_mark(), Mark::X);
        assert!(session.history().is_empty());
        assert_eq!(session.scoreboard().wins(Mark::X), 1);

        // O 获胜：X 0 1 8，O 3 4 5
        play_all(&mut session, &[0, 3, 1, 4, 8, 5]);
        assert_eq!(session.scoreboard().wins(Mark::O), 1);
        assert_eq!(session.scoreboard().games(), 2);

        session.restart();
        assert_eq!(session.scoreboard(), Scoreboard::default());
    }
}
