use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use sweeper_core::*;

mod command;
mod render;

use command::Command;

#[derive(Parser, Debug)]
#[command(version, about = "Terminal minesweeper with a best-times leaderboard", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board configuration file holding `columns rows mines`
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Leaderboard file
    #[arg(short, long, default_value = DEFAULT_LEADERBOARD_PATH)]
    leaderboard: PathBuf,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Player name, asked for when missing
    #[arg(short, long)]
    name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::load(&args.config)
        .with_context(|| format!("loading board configuration {}", args.config.display()))?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let name = match args.name.as_deref().map(normalize_player_name) {
        Some(name) if !name.is_empty() => name,
        _ => match prompt_name(&mut input)? {
            Some(name) => name,
            None => return Ok(()),
        },
    };

    let seed = args.seed.unwrap_or_else(rand_seed);
    log::debug!("seed: {}", seed);

    let mut controller = Controller::new(config, &name, &args.leaderboard, seed)?;
    log::debug!("App started");

    run(&mut controller, &mut input)
}

fn rand_seed() -> u64 {
    RandomMinefieldGenerator::from_entropy().seed()
}

/// Asks until a non-empty name is given; `None` on end of input.
fn prompt_name(input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    loop {
        print!("Enter your name: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let name = normalize_player_name(&line);
        if !name.is_empty() {
            return Ok(Some(name));
        }
        println!("Letters only, up to {MAX_NAME_LEN} of them.");
    }
}

fn run(controller: &mut Controller, input: &mut impl BufRead) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", render::frame(&controller.frame()))?;

    let mut line = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{err}, type `h` for help")?;
                continue;
            }
        };

        let action = match command {
            Command::Action(action) => action,
            Command::Click(button, x, y) => match controller.cell_at_pixel(x, y) {
                Some(coords) => button.action(coords),
                None => continue,
            },
            Command::Leaderboard if controller.is_leaderboard_open() => Action::CloseLeaderboard,
            Command::Leaderboard => Action::OpenLeaderboard,
            Command::Snapshot => {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&controller.frame())?)?;
                continue;
            }
            Command::Help => {
                writeln!(stdout, "{}", command::HELP)?;
                continue;
            }
            Command::Quit => break,
        };

        if controller.dispatch(action).has_update() {
            write!(stdout, "{}", render::frame(&controller.frame()))?;
        }
    }

    // the leaderboard is written back when its view closes
    if controller.is_leaderboard_open() {
        controller.dispatch(Action::CloseLeaderboard);
    }
    Ok(())
}
