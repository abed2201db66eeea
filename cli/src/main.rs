mod config;
mod game_loop;

use clap::{Parser, ValueEnum};
use tictactoe_engine::{BotType, log, logger};

use config::{CONFIG_FILE, Config, get_config_manager};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Rule-based opponent that can be beaten.
    Normal,
    /// Exhaustive minimax opponent.
    Unbeatable,
}

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Difficulty; overrides the config file.
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Path to the YAML config file.
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Game".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let manager = get_config_manager(&args.config);
    if !std::path::Path::new(&args.config).exists() {
        manager.set_config(&Config::default())?;
        log!("Wrote default config to {}", args.config);
    }

    let mut config = manager.get_config()?;
    if let Some(mode) = args.mode {
        config.game.bot_type = match mode {
            Mode::Normal => BotType::Heuristic,
            Mode::Unbeatable => BotType::Minimax,
        };
    }

    game_loop::run_game(&config.game)?;
    Ok(())
}
