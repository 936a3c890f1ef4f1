//! 搜索引擎
//!
//! 实现穷举 Minimax + Alpha-Beta 剪枝，以及按难度随机接受次优候选

use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ttt_core::{Board, Difficulty, GameError, Mark};

use crate::error::SearchError;
use crate::evaluate::{Evaluator, ALPHA_INIT, BETA_INIT};

/// AI 配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// `search` 使用的默认难度
    pub difficulty: Difficulty,
    /// 随机种子（None 表示从系统熵初始化）
    pub seed: Option<u64>,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            seed: None,
        }
    }

    /// 指定随机种子（用于复现）
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// 接受更差候选的概率
    pub fn perturb_probability(difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Easy => 0.30,
            Difficulty::Normal => 0.10,
            Difficulty::Unbeatable => 0.0,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Normal)
    }
}

/// 对弈双方标记
#[derive(Debug, Clone, Copy)]
struct Sides {
    ai: Mark,
    human: Mark,
}

/// AI 引擎
///
/// 随机源可注入，默认使用 ChaCha8。
pub struct AiEngine<R = ChaCha8Rng> {
    config: AiConfig,
    rng: R,
    nodes_searched: u64,
}

impl AiEngine<ChaCha8Rng> {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }
}

impl<R: RngCore> AiEngine<R> {
    /// 使用指定随机源创建
    pub fn with_rng(config: AiConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            nodes_searched: 0,
        }
    }

    /// 配置的默认难度
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// 按配置难度为 `ai_mark` 选择走法，对手为另一方
    pub fn search(&mut self, board: &Board, ai_mark: Mark) -> Result<usize, SearchError> {
        let difficulty = self.config.difficulty;
        self.select_move(board, ai_mark, ai_mark.opponent(), difficulty)
    }

    /// 选择走法
    ///
    /// 在棋盘副本上按升序逐个试探空格，同分时保留先出现的格子。
    /// 对于严格更差的候选，以难度对应的概率仍然采用。
    ///
    /// 分数不计深度：若更靠前的格子能强制取胜，它与即胜格同分并被保留。
    pub fn select_move(
        &mut self,
        board: &Board,
        ai_mark: Mark,
        human_mark: Mark,
        difficulty: Difficulty,
    ) -> Result<usize, SearchError> {
        if ai_mark == human_mark {
            return Err(SearchError::SameMarks { mark: ai_mark });
        }

        let candidates = board.empty_indices();
        if candidates.is_empty() {
            return Err(SearchError::NoLegalMove);
        }

        self.nodes_searched = 0;
        let sides = Sides {
            ai: ai_mark,
            human: human_mark,
        };
        let perturb = AiConfig::perturb_probability(difficulty);
        let mut scratch = board.clone();

        let mut best: Option<usize> = None;
        let mut best_score = i32::MIN;
        // 当前最佳是否一步即胜：这种走法不会被随机替换
        let mut best_wins_now = false;

        for &index in &candidates {
            scratch.place(index, ai_mark).map_err(GameError::from)?;
            let wins_now = scratch.check_win(ai_mark).is_some();
            let score = self.minimax(&mut scratch, human_mark, ALPHA_INIT, BETA_INIT, sides)?;
            scratch.withdraw(index);

            if score > best_score {
                best = Some(index);
                best_score = score;
                best_wins_now = wins_now;
            } else if score < best_score
                && !best_wins_now
                && perturb > 0.0
                && self.rng.gen_bool(perturb)
            {
                debug!("接受次优候选 {} (score {} < {})", index, score, best_score);
                best = Some(index);
            }
        }

        let chosen = match best {
            Some(index) => index,
            None => {
                warn!("没有候选被采用，随机选择空格");
                *candidates
                    .choose(&mut self.rng)
                    .ok_or(SearchError::NoLegalMove)?
            }
        };

        debug!(
            "AI({}) 难度 {:?} 选择 {}，最佳分 {}，搜索节点 {}",
            ai_mark, difficulty, chosen, best_score, self.nodes_searched
        );

        Ok(chosen)
    }

    /// Minimax + Alpha-Beta 搜索（AI 视角）
    ///
    /// 在同一个草稿棋盘上落子、递归、撤回，返回前棋盘恢复原状。
    fn minimax(
        &mut self,
        board: &mut Board,
        to_move: Mark,
        mut alpha: i32,
        mut beta: i32,
        sides: Sides,
    ) -> Result<i32, SearchError> {
        self.nodes_searched += 1;

        if let Some(score) = Evaluator::terminal_score(board, sides.ai, sides.human) {
            return Ok(score);
        }

        let maximizing = to_move == sides.ai;
        for index in board.empty_indices() {
            board.place(index, to_move).map_err(GameError::from)?;
            let score = self.minimax(board, to_move.opponent(), alpha, beta, sides)?;
            board.withdraw(index);

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }

            if alpha > beta {
                break; // 剪枝
            }
        }

        Ok(if maximizing { alpha } else { beta })
    }

    /// 获取上一次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use ttt_core::{Notation, Outcome};

    /// 永远接受随机替换的随机源
    fn always_perturb() -> StepRng {
        StepRng::new(0, 0)
    }

    fn seeded(difficulty: Difficulty, seed: u64) -> AiEngine {
        AiEngine::new(AiConfig::from_difficulty(difficulty).with_seed(seed))
    }

    /// 从当前局面穷举人类所有应对，断言 AI 从不输
    fn assert_never_loses(engine: &mut AiEngine, board: &mut Board, ai: Mark, human: Mark) {
        match board.outcome() {
            Outcome::Win { mark, .. } => {
                assert_ne!(mark, human, "AI lost on {}", Notation::format(board));
                return;
            }
            Outcome::Draw => return,
            Outcome::InProgress => {}
        }

        if board.active_mark() == ai {
            let index = engine
                .select_move(board, ai, human, Difficulty::Unbeatable)
                .unwrap();
            board.place(index, ai).unwrap();
            assert_never_loses(engine, board, ai, human);
            board.withdraw(index);
        } else {
            for index in board.empty_indices() {
                board.place(index, human).unwrap();
                assert_never_loses(engine, board, ai, human);
                board.withdraw(index);
            }
        }
    }

    #[test]
    fn test_difficulty_config() {
        assert_eq!(AiConfig::perturb_probability(Difficulty::Easy), 0.30);
        assert_eq!(AiConfig::perturb_probability(Difficulty::Normal), 0.10);
        assert_eq!(AiConfig::perturb_probability(Difficulty::Unbeatable), 0.0);

        let config = AiConfig::default();
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_config_serialize() {
        let config = AiConfig::from_difficulty(Difficulty::Easy).with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let decoded: AiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_no_legal_move() {
        let board = Notation::parse("XOX/XOO/OXX").unwrap();
        let mut engine = seeded(Difficulty::Unbeatable, 0);
        assert_eq!(
            engine.select_move(&board, Mark::O, Mark::X, Difficulty::Unbeatable),
            Err(SearchError::NoLegalMove)
        );
    }

    #[test]
    fn test_same_marks_rejected() {
        let mut engine = seeded(Difficulty::Unbeatable, 0);
        assert_eq!(
            engine.select_move(&Board::empty(), Mark::X, Mark::X, Difficulty::Unbeatable),
            Err(SearchError::SameMarks { mark: Mark::X })
        );
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = Notation::parse("X--/-O-/--X").unwrap();
        let before = board.clone();
        let mut engine = AiEngine::from_difficulty(Difficulty::Easy);
        engine.select_move(&board, Mark::O, Mark::X, Difficulty::Easy).unwrap();
        assert_eq!(board, before);
        assert!(engine.nodes_searched() > 0);
    }

    #[test]
    fn test_takes_immediate_win_every_difficulty() {
        // X 走：0-1 已连两子，2 即胜
        let first = Notation::parse("XX-/OO-/---").unwrap();
        // O 走：唯一不输的走法 8 也是即胜，且排在最后
        let last = Notation::parse("X-O/-XO/-X-").unwrap();

        for &difficulty in Difficulty::all() {
            for seed in 0..20 {
                let mut engine = seeded(difficulty, seed);
                assert_eq!(engine.select_move(&first, Mark::X, Mark::O, difficulty), Ok(2));
                assert_eq!(engine.select_move(&last, Mark::O, Mark::X, difficulty), Ok(8));
            }

            let mut engine = AiEngine::with_rng(AiConfig::from_difficulty(difficulty), always_perturb());
            assert_eq!(engine.select_move(&first, Mark::X, Mark::O, difficulty), Ok(2));
        }
    }

    #[test]
    fn test_deferred_win_ties_with_immediate_win() {
        // X 走：8 即胜，但 4 形成双杀同样得满分且排在前面
        let board = Notation::parse("XOX/O-X/-O-").unwrap();
        assert_eq!(board.active_mark(), Mark::X);

        let mut scratch = board.clone();
        scratch.place(8, Mark::X).unwrap();
        assert!(scratch.check_win(Mark::X).is_some());

        for seed in 0..5 {
            let mut engine = seeded(Difficulty::Unbeatable, seed);
            assert_eq!(engine.search(&board, Mark::X), Ok(4));
        }

        // 4 之后 O 只能堵住一条，下一步 X 仍然获胜
        let mut engine = seeded(Difficulty::Unbeatable, 0);
        let mut after = board.clone();
        after.place(4, Mark::X).unwrap();
        assert_eq!(after.check_win(Mark::X), None);
        for reply in after.empty_indices() {
            let mut next = after.clone();
            next.place(reply, Mark::O).unwrap();
            assert_eq!(next.check_win(Mark::O), None);
            let finish = engine.search(&next, Mark::X).unwrap();
            next.place(finish, Mark::X).unwrap();
            assert!(next.check_win(Mark::X).is_some(), "reply {}", reply);
        }

        // 当前最佳 4 并非即胜，随机替换可以换成输棋的 6
        let mut easy = AiEngine::with_rng(AiConfig::from_difficulty(Difficulty::Easy), always_perturb());
        assert_eq!(easy.search(&board, Mark::X), Ok(6));
    }

    #[test]
    fn test_minimax_scores_and_restores() {
        let sides = Sides {
            ai: Mark::X,
            human: Mark::O,
        };
        let mut board = Notation::parse("XX-/OO-/---").unwrap();
        let before = board.clone();
        let mut engine = seeded(Difficulty::Unbeatable, 0);

        assert_eq!(engine.minimax(&mut board, Mark::X, ALPHA_INIT, BETA_INIT, sides), Ok(100));
        assert_eq!(engine.minimax(&mut board, Mark::O, ALPHA_INIT, BETA_INIT, sides), Ok(-100));
        assert_eq!(board, before);
    }

    #[test]
    fn test_blocks_immediate_loss() {
        let board = Notation::parse("XX-/-O-/---").unwrap();
        let mut engine = seeded(Difficulty::Unbeatable, 0);
        assert_eq!(engine.select_move(&board, Mark::O, Mark::X, Difficulty::Unbeatable), Ok(2));

        let board = Notation::parse("O-X/-X-/---").unwrap();
        assert_eq!(engine.select_move(&board, Mark::O, Mark::X, Difficulty::Unbeatable), Ok(6));
    }

    #[test]
    fn test_center_opening_gets_corner_reply() {
        let board = Notation::parse("---/-X-/---").unwrap();
        let mut engine = seeded(Difficulty::Unbeatable, 0);
        let reply = engine.search(&board, Mark::O).unwrap();
        assert!([0, 2, 6, 8].contains(&reply), "edge reply {}", reply);
    }

    #[test]
    fn test_unbeatable_is_deterministic() {
        let board = Notation::parse("X--/---/---").unwrap();
        let expected = seeded(Difficulty::Unbeatable, 0).search(&board, Mark::O).unwrap();
        for seed in 1..10 {
            let mut engine = seeded(Difficulty::Unbeatable, seed);
            assert_eq!(engine.search(&board, Mark::O), Ok(expected));
            assert_eq!(engine.search(&board, Mark::O), Ok(expected));
        }
    }

    #[test]
    fn test_ties_are_never_perturbed() {
        // 空棋盘所有开局均为和棋分，即使每次都同意替换也只会保留第一个格子
        for &difficulty in Difficulty::all() {
            let mut engine = AiEngine::with_rng(AiConfig::from_difficulty(difficulty), always_perturb());
            assert_eq!(engine.search(&Board::empty(), Mark::X), Ok(0));
        }
    }

    #[test]
    fn test_perturbation_accepts_worse_candidates() {
        // O 必须堵 2；其余格子都会输
        let board = Notation::parse("XX-/-O-/---").unwrap();

        let mut easy = AiEngine::with_rng(AiConfig::from_difficulty(Difficulty::Easy), always_perturb());
        assert_eq!(easy.search(&board, Mark::O), Ok(8));

        let mut unbeatable =
            AiEngine::with_rng(AiConfig::from_difficulty(Difficulty::Unbeatable), always_perturb());
        assert_eq!(unbeatable.search(&board, Mark::O), Ok(2));
    }

    #[test]
    fn test_easy_blunders_more_than_normal() {
        let board = Notation::parse("XX-/-O-/---").unwrap();
        let blunders = |difficulty| {
            (0..200)
                .filter(|&seed| seeded(difficulty, seed).search(&board, Mark::O) != Ok(2))
                .count()
        };

        let easy = blunders(Difficulty::Easy);
        let normal = blunders(Difficulty::Normal);
        assert!(easy > normal, "easy {} vs normal {}", easy, normal);
        assert!(normal > 0);
        assert_eq!(blunders(Difficulty::Unbeatable), 0);
    }

    #[test]
    fn test_unbeatable_never_loses() {
        let mut engine = seeded(Difficulty::Unbeatable, 0);

        // 人类执 X 先手
        assert_never_loses(&mut engine, &mut Board::empty(), Mark::O, Mark::X);

        // 人类执 O 后手
        assert_never_loses(&mut engine, &mut Board::empty(), Mark::X, Mark::O);
    }
}
