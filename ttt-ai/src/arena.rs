//! 引擎自对弈
//!
//! 两个引擎轮流为 X / O 选择走法，走法通过 `GameSession` 落到权威棋盘

use rand::RngCore;
use tracing::{debug, info};
use ttt_core::{GameSession, Mark, Outcome, Scoreboard};

use crate::error::SearchError;
use crate::search::AiEngine;

/// 一局自对弈的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedGame {
    /// 终局结果
    pub outcome: Outcome,
    /// 落子顺序
    pub moves: Vec<usize>,
}

/// 自对弈场地
///
/// 双方各自按引擎配置中的难度走棋。
pub struct Arena<R> {
    x_engine: AiEngine<R>,
    o_engine: AiEngine<R>,
    session: GameSession,
}

impl<R: RngCore> Arena<R> {
    /// 创建场地（X 先手）
    pub fn new(x_engine: AiEngine<R>, o_engine: AiEngine<R>) -> Self {
        Self {
            x_engine,
            o_engine,
            session: GameSession::new(),
        }
    }

    /// 从空棋盘下完一局
    pub fn play_game(&mut self) -> Result<PlayedGame, SearchError> {
        self.session.rematch();

        while !self.session.outcome().is_terminal() {
            let mark = self.session.active_mark();
            let engine = match mark {
                Mark::X => &mut self.x_engine,
                Mark::O => &mut self.o_engine,
            };
            let index = engine.search(self.session.board(), mark)?;
            self.session.play(index)?;
        }

        let game = PlayedGame {
            outcome: self.session.outcome(),
            moves: self.session.history().to_vec(),
        };
        debug!("自对弈结束: {} {:?}", game.outcome, game.moves);
        Ok(game)
    }

    /// 连续对弈 `games` 局，返回累计比分
    pub fn run(&mut self, games: u32) -> Result<Scoreboard, SearchError> {
        self.session.restart();
        for _ in 0..games {
            self.play_game()?;
        }

        let score = self.session.scoreboard();
        info!(
            "自对弈 {} 局 ({} vs {}): X 胜 {}，O 胜 {}，和 {}",
            games,
            self.x_engine.difficulty(),
            self.o_engine.difficulty(),
            score.x_wins,
            score.o_wins,
            score.draws
        );
        Ok(score)
    }
}
