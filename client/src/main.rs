mod config;
mod input;
mod render;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use seven_row_common::game::Difficulty;
use seven_row_common::session::{ChannelBroadcaster, GameMode, SessionHandle};
use seven_row_common::{SessionRng, log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};

use config::{Config, get_config_manager};
use input::{Command, parse_command};

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Hvh,
    Hvc,
    Cvc,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Hvh => GameMode::HumanVsHuman,
            ModeArg::Hvc => GameMode::HumanVsComputer,
            ModeArg::Cvc => GameMode::ComputerVsComputer,
        }
    }
}

#[derive(Parser)]
#[command(name = "seven_row_client")]
struct Args {
    /// Seed for the computer player; random when neither this nor the config sets one
    #[arg(long)]
    seed: Option<u64>,
    /// Skip the menu and start this mode
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// Difficulty level 1-3 used with --mode
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    difficulty: Option<u8>,
    #[arg(long)]
    use_log_prefix: bool,
    /// Config file path, defaults to a file next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
}

type Handle = SessionHandle<ChannelBroadcaster>;

async fn execute(handle: &Handle, command: Command, config: &mut Config) -> bool {
    match command {
        Command::SelectMode(mode) => {
            let accepted = handle.start_game(mode).await;
            if accepted {
                config.last_mode = Some(mode);
            }
            accepted
        }
        Command::SelectDifficulty(difficulty) => {
            let accepted = handle.start_game_with_difficulty(difficulty).await;
            if accepted {
                config.last_difficulty = Some(difficulty);
            }
            accepted
        }
        Command::Back => handle.cancel_difficulty_selection().await,
        Command::Place(index) => handle.attempt_move(index).await.is_some(),
        Command::Reset => handle.reset_game().await,
        Command::Menu => {
            handle.return_to_menu().await;
            true
        }
        Command::Quit => true,
    }
}

async fn start_from_args(handle: &Handle, args: &Args, config: &mut Config) {
    let Some(mode) = args.mode.map(GameMode::from) else {
        return;
    };
    if !execute(handle, Command::SelectMode(mode), config).await || !mode.needs_difficulty() {
        return;
    }
    let difficulty = args
        .difficulty
        .and_then(Difficulty::from_level)
        .or(config.last_difficulty)
        .unwrap_or(Difficulty::Blocking);
    execute(handle, Command::SelectDifficulty(difficulty), config).await;
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.clone());
    let mut config = config_manager.get_config().unwrap_or_else(|e| {
        log!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let (broadcaster, mut snapshots) = ChannelBroadcaster::new();
    let handle = SessionHandle::new(config.pacing, rng, broadcaster);

    start_from_args(&handle, &args, &mut config).await;
    print!("{}", render::render(&handle.snapshot().await));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(snapshot) = snapshots.recv() => {
                print!("{}", render::render(&snapshot));
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let phase = handle.snapshot().await.phase;
                match parse_command(phase, &line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        if !execute(&handle, command, &mut config).await {
                            println!("Not allowed right now.");
                        }
                    }
                    Err(message) => println!("{}", message),
                }
            }
        }
    }

    handle.return_to_menu().await;
    if let Err(e) = config_manager.set_config(&config) {
        log!("Failed to save config: {}", e);
    }
    log!("Client shut down");

    Ok(())
}
