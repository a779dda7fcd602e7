//! Headless replay driver (default binary).
//!
//! Feeds a command script through a [`Session`] one step per `tick` token and
//! prints the final state. Useful for reproducing a game from a seed without
//! any renderer attached.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use blockfall::core::{GameConfig, GameSnapshot, PieceSource};
use blockfall::engine::Session;
use blockfall::types::{GameCommand, ShapeKind, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH};

#[derive(Debug, Parser)]
#[command(version, about = "Replay a command script against the falling-block engine")]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u16,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u16,

    /// Seed for the 7-bag piece source
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u32,

    /// Fixed repeating piece sequence such as `IOT` (overrides --seed)
    #[arg(long)]
    pieces: Option<String>,

    /// Extra ticks to run after the script
    #[arg(long, default_value_t = 0)]
    ticks: u32,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Script of whitespace-separated tokens (`left right down cw ccw drop restart tick tick:N`)
    script: Option<PathBuf>,
}

/// One parsed script token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Command(GameCommand),
    Ticks(u32),
}

fn parse_token(token: &str) -> Option<Step> {
    if let Some(count) = token.strip_prefix("tick:") {
        return count.parse().ok().map(Step::Ticks);
    }
    if token.eq_ignore_ascii_case("tick") {
        return Some(Step::Ticks(1));
    }
    GameCommand::parse(token).map(Step::Command)
}

fn parse_script(text: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default();
        for token in line.split_whitespace() {
            match parse_token(token) {
                Some(step) => steps.push(step),
                None => bail!("line {}: unknown token `{}`", line_no + 1, token),
            }
        }
    }
    Ok(steps)
}

fn parse_pieces(letters: &str) -> Result<Vec<ShapeKind>> {
    letters
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| ShapeKind::from_char(c).with_context(|| format!("unknown piece `{}`", c)))
        .collect()
}

fn build_config(args: &Args) -> Result<GameConfig> {
    let source = match &args.pieces {
        Some(letters) => PieceSource::Cycle(parse_pieces(letters)?),
        None => PieceSource::SevenBag { seed: args.seed },
    };
    let config = GameConfig::new(args.width, args.height).with_source(source);
    config.validate().context("invalid game configuration")?;
    Ok(config)
}

fn run_ticks(session: &mut Session, count: u32) {
    for _ in 0..count {
        if session.state().is_game_over() {
            break;
        }
        session.step();
    }
}

/// Run a parsed script; commands left after the last tick still apply
fn replay(session: &mut Session, steps: &[Step]) {
    for &step in steps {
        match step {
            Step::Command(command) => {
                if !session.push(command) {
                    // Queue full between two ticks: apply what is buffered first.
                    session.flush();
                    session.push(command);
                }
            }
            Step::Ticks(count) => run_ticks(session, count),
        }
    }
    session.flush();
}

fn render_text(snap: &GameSnapshot) -> String {
    let mut out = String::new();
    for y in 0..snap.height as i16 {
        out.push('|');
        for x in 0..snap.width as i16 {
            out.push(snap.composed_cell(x, y).map_or('.', ShapeKind::as_char));
        }
        out.push_str("|\n");
    }
    out.push('+');
    out.push_str(&"-".repeat(snap.width as usize));
    out.push_str("+\n");
    out.push_str(&format!(
        "score {}  lines {}  level {}  pieces {}  next {}{}\n",
        snap.score,
        snap.lines,
        snap.level,
        snap.pieces_locked,
        snap.next.as_char(),
        if snap.game_over { "  GAME OVER" } else { "" }
    ));
    out
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = build_config(&args)?;
    let steps = match &args.script {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read script {}", path.display()))?;
            parse_script(&text)?
        }
        None => Vec::new(),
    };

    let mut session = Session::new(config)?;
    replay(&mut session, &steps);
    run_ticks(&mut session, args.ticks);

    info!(
        "replay finished after {} steps, score {}",
        session.steps(),
        session.state().score()
    );

    let snap = session.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snap)?);
    } else {
        print!("{}", render_text(&snap));
    }
    Ok(())
}
