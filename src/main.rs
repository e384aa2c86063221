use anyhow::{anyhow, Context, Result};
use clap::Parser;
use python_bend::game::{config::DEFAULT_TICK_RATE, GameConfig};
use python_bend::logging;
use python_bend::modes::HumanMode;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "python_bend")]
#[command(version, about = "Grid snake game for the terminal")]
struct Cli {
    /// Game ticks per second
    #[arg(long, default_value_t = DEFAULT_TICK_RATE)]
    tick_rate: u32,

    /// Append logs to this file (RUST_LOG controls the level)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::with_tick_rate(cli.tick_rate);
    config
        .validate()
        .map_err(|msg| anyhow!(msg))
        .context("Invalid game configuration")?;

    if cli.dump_config {
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    logging::init(cli.log_file.as_deref())?;
    info!(
        width_px = config.board.width_px,
        height_px = config.board.height_px,
        cell_px = config.board.cell_px,
        tick_rate = config.tick_rate,
        "starting"
    );

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
