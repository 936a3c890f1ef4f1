//! 井字棋终端驱动
//!
//! 负责命令行解析、设置文件、日志初始化以及人机对弈的终端交互

pub mod cli;
pub mod play;
pub mod settings;
pub mod simulate;

pub use cli::{Cli, Command, LogLevel};
pub use settings::Settings;
