//! 终局评估

use ttt_core::{Board, Mark};

/// AI 获胜分
pub const WIN_SCORE: i32 = 100;

/// AI 失败分
pub const LOSS_SCORE: i32 = -100;

/// 和棋分
pub const DRAW_SCORE: i32 = 0;

/// 根节点初始 alpha
pub const ALPHA_INIT: i32 = -1000;

/// 根节点初始 beta
pub const BETA_INIT: i32 = 1000;

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 终局评估（AI 视角），未终局返回 None
    ///
    /// 分数不随深度衰减：立即获胜与若干步后获胜同分。
    pub fn terminal_score(board: &Board, ai_mark: Mark, human_mark: Mark) -> Option<i32> {
        if board.check_win(ai_mark).is_some() {
            Some(WIN_SCORE)
        } else if board.check_win(human_mark).is_some() {
            Some(LOSS_SCORE)
        } else if board.is_full() {
            Some(DRAW_SCORE)
        } else {
            None
        }
    }
}
