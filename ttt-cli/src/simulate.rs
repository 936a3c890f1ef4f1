//! 引擎自对弈统计

use std::io::Write;

use anyhow::Result;
use ttt_ai::{AiConfig, AiEngine, Arena};

use crate::cli::SimulateArgs;

/// 运行自对弈并输出比分
///
/// `fallback_seed` 来自设置文件，命令行 `--seed` 优先。
pub fn run<W: Write>(args: &SimulateArgs, fallback_seed: Option<u64>, output: &mut W) -> Result<()> {
    let seed = args.seed.or(fallback_seed);

    let x_config = AiConfig {
        difficulty: args.x_difficulty,
        seed,
    };
    let o_config = AiConfig {
        difficulty: args.o_difficulty,
        seed: seed.map(|s| s.wrapping_add(1)),
    };

    let mut arena = Arena::new(AiEngine::new(x_config), AiEngine::new(o_config));
    let score = arena.run(args.games)?;

    writeln!(
        output,
        "{} games, X ({}) vs O ({})",
        args.games, args.x_difficulty, args.o_difficulty
    )?;
    writeln!(output, "X wins: {}", score.x_wins)?;
    writeln!(output, "O wins: {}", score.o_wins)?;
    writeln!(output, "Draws:  {}", score.draws)?;
    Ok(())
}
