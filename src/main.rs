use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};
use snake3d::game::GameConfig;
use snake3d::modes::HumanMode;

#[derive(Parser)]
#[command(name = "snake3d")]
#[command(version, about = "Wrap-around snake on a 200x200 grid")]
struct Cli {
    /// Seed for food placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Frames per second; the simulation is advanced once per frame
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Write logs to this file (filter with RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    // The TUI owns the terminal, so logs only go to a file
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = GameConfig::default();

    log::info!(
        "starting: grid {}, {} food items, seed {:?}, {} fps",
        config.grid_size,
        config.food_count,
        cli.seed,
        cli.fps
    );

    let mut human_mode = HumanMode::new(config, cli.seed, cli.fps)?;
    human_mode.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_range() {
        let cli = Cli::try_parse_from(["snake3d"]).unwrap();
        assert_eq!(cli.fps, 60);
        assert_eq!(Cli::try_parse_from(["snake3d", "--fps", "240"]).unwrap().fps, 240);

        assert!(Cli::try_parse_from(["snake3d", "--fps", "0"]).is_err());
        assert!(Cli::try_parse_from(["snake3d", "--fps", "241"]).is_err());
    }
}
