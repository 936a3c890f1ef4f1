//! 命令行参数

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::filter::LevelFilter;
use ttt_core::{Difficulty, Mark};

use crate::settings::Settings;

/// 井字棋：人机对弈与引擎自对弈
#[derive(Debug, Parser)]
#[command(name = "tictactoe", version)]
pub struct Cli {
    /// 日志级别（RUST_LOG 可进一步细化）
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// 设置文件路径（默认位于系统配置目录）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 在终端与 AI 对弈
    Play(SettingsArgs),
    /// 让两个 AI 自对弈并统计结果
    Simulate(SimulateArgs),
    /// 修改并保存设置
    Config(SettingsArgs),
}

/// 可覆盖设置文件的参数
#[derive(Debug, Clone, Default, Args)]
pub struct SettingsArgs {
    /// AI 难度: easy / normal / unbeatable
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// 人类执子: X（先手）或 O
    #[arg(long)]
    pub human_mark: Option<Mark>,

    /// AI 随机种子
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SettingsArgs {
    /// 命令行参数优先于设置文件
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
        if let Some(mark) = self.human_mark {
            settings.human_mark = mark;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SimulateArgs {
    /// 对弈局数
    #[arg(long, default_value_t = 100)]
    pub games: u32,

    /// X 方难度
    #[arg(long = "x", default_value_t = Difficulty::Unbeatable)]
    pub x_difficulty: Difficulty,

    /// O 方难度
    #[arg(long = "o", default_value_t = Difficulty::Unbeatable)]
    pub o_difficulty: Difficulty,

    /// 随机种子（X 使用 seed，O 使用 seed + 1）
    #[arg(long)]
    pub seed: Option<u64>,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}
