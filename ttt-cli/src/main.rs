use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttt_cli::{play, simulate, Cli, Command, Settings};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志（输出到 stderr，不干扰棋盘显示）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(cli.log_level.to_level_filter().into()))
        .init();

    let mut settings = Settings::load(cli.config.as_deref());
    info!("当前设置: {:?}", settings);

    match cli.command {
        Command::Play(args) => {
            args.apply(&mut settings);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            play::run(&settings, stdin.lock(), &mut stdout)?;
        }
        Command::Simulate(args) => {
            let mut stdout = std::io::stdout();
            simulate::run(&args, settings.seed, &mut stdout)?;
        }
        Command::Config(args) => {
            args.apply(&mut settings);
            let path = settings.save(cli.config.as_deref())?;
            println!("Settings saved to {}", path.display());
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
