//! Pattern Lock - Demo Driver
//!
//! Runs a pattern grid against an in-memory renderer, driven by a
//! line-oriented script on stdin:
//!
//!   down <row> <col>   press on a point
//!   move <x> <y>       move the pointer to a screen position
//!   cell <row> <col>   move the pointer to a point's centre
//!   up                 release
//!   leave              pointer left the surface
//!   reset              clear the pattern
//!   show               print the grid
//!   quit               exit

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use pattern_lock::render::{GridLayout, RecordingRenderer};
use pattern_lock::{Coordinate, PatternConfig, PatternGrid, PointerEvent, Result};

#[derive(Parser, Debug)]
#[command(name = "pattern-lock")]
#[command(about = "Drive a pattern-lock grid from a stdin script")]
struct Args {
    /// TOML grid config (see data/patterns/default.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of point rows (overrides the config)
    #[arg(long)]
    rows: Option<usize>,

    /// Number of point columns (overrides the config)
    #[arg(long)]
    cols: Option<usize>,

    /// Target pattern length (overrides the config)
    #[arg(long)]
    target: Option<i64>,

    /// Print observer notifications as JSON lines
    #[arg(long)]
    json: bool,
}

/// One observer notification, as printed with `--json`
#[derive(Serialize)]
struct SelectionEvent<'a> {
    points: &'a [Coordinate],
    invalid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Down(Coordinate),
    Move(Vec2),
    Cell(Coordinate),
    Up,
    Leave,
    Reset,
    Show,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let name = parts.next()?;
    let mut next_usize = || parts.next()?.parse::<usize>().ok();
    let command = match name {
        "down" | "d" => Command::Down(Coordinate::new(next_usize()?, next_usize()?)),
        "cell" | "c" => Command::Cell(Coordinate::new(next_usize()?, next_usize()?)),
        "move" | "m" => {
            let mut parts = line.split_whitespace().skip(1);
            let x = parts.next()?.parse::<f32>().ok()?;
            let y = parts.next()?.parse::<f32>().ok()?;
            Command::Move(Vec2::new(x, y))
        }
        "up" | "u" => Command::Up,
        "leave" => Command::Leave,
        "reset" | "r" => Command::Reset,
        "show" | "s" => Command::Show,
        "quit" | "q" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn load_config(args: &Args) -> Result<PatternConfig> {
    let mut config = match &args.config {
        Some(path) => PatternConfig::load(path)?,
        None => PatternConfig::default(),
    };
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if let Some(target) = args.target {
        config.target_length = Some(target);
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pattern_lock=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let spec = load_config(&args)?.validate()?;
    let layout = GridLayout::from_theme(spec.size, &spec.theme, Vec2::ZERO);

    tracing::info!(
        rows = spec.size.rows,
        cols = spec.size.cols,
        target_length = spec.target_length,
        "Pattern Lock starting..."
    );

    let mut grid = PatternGrid::from_spec(spec, RecordingRenderer::new(layout));
    let json = args.json;
    grid.subscribe(move |points: &[Coordinate], invalid: bool| {
        if json {
            match serde_json::to_string(&SelectionEvent { points, invalid }) {
                Ok(line) => println!("{line}"),
                Err(err) => tracing::error!("failed to encode selection: {err}"),
            }
        } else {
            let path: Vec<String> = points.iter().map(ToString::to_string).collect();
            let marker = if invalid { " [invalid]" } else { "" };
            println!("selection: [{}]{marker}", path.join(", "));
        }
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(command) = parse_command(line) else {
            tracing::warn!("unrecognised command: {line}");
            continue;
        };

        match command {
            Command::Down(cell) => {
                let point = layout.cell_center(cell);
                grid.handle(PointerEvent::Down(point));
            }
            Command::Move(point) => grid.handle(PointerEvent::Move(point)),
            Command::Cell(cell) => grid.handle(PointerEvent::Move(layout.cell_center(cell))),
            Command::Up => grid.handle(PointerEvent::Up),
            Command::Leave => grid.handle(PointerEvent::Leave),
            Command::Reset => grid.reset(),
            Command::Show => {
                write!(stdout, "{}", grid.renderer().ascii())?;
                stdout.flush()?;
            }
            Command::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("down 1 2"), Some(Command::Down(Coordinate::new(1, 2))));
        assert_eq!(parse_command("move 12.5 3"), Some(Command::Move(Vec2::new(12.5, 3.0))));
        assert_eq!(parse_command("c 0 3"), Some(Command::Cell(Coordinate::new(0, 3))));
        assert_eq!(parse_command("up"), Some(Command::Up));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_command("down 1"), None);
        assert_eq!(parse_command("move x y"), None);
        assert_eq!(parse_command("jump"), None);
    }
}
