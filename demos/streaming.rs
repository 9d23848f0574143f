//! Terminal visualizer for the streaming navigation grid.
//!
//! Run: cargo run --bin streaming -- [--bfs] [--ticks N] [--seed N] [--chunk N]
//!
//! Walkable cells are drawn grey, blocked cells red, the hunter's current
//! path black. `@` is the player, `H` the hunter.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use navgrid_core::Point;
use navgrid_paths::{Algorithm, GridConfig, MAX_CHUNK_SIZE, Overlay, OverlayCell};
use navgrid_demos::World;

struct Options {
    algorithm: Algorithm,
    ticks: u64,
    seed: u64,
    chunk: u32,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options {
        algorithm: Algorithm::AStar,
        ticks: 600,
        seed: 42,
        chunk: 12,
    };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let mut number = |name: &str| -> Result<u64, String> {
            args.next()
                .ok_or_else(|| format!("{name} needs a value"))?
                .parse()
                .map_err(|e| format!("{name}: {e}"))
        };
        match arg.as_str() {
            "--bfs" => opts.algorithm = Algorithm::Bfs,
            "--ticks" => opts.ticks = number("--ticks")?,
            "--seed" => opts.seed = number("--seed")?,
            "--chunk" => {
                let chunk = number("--chunk")?;
                opts.chunk = u32::try_from(chunk)
                    .ok()
                    .filter(|&c| c <= MAX_CHUNK_SIZE)
                    .ok_or_else(|| format!("--chunk: {chunk} exceeds {MAX_CHUNK_SIZE}"))?;
            }
            other => return Err(format!("unknown argument {other}")),
        }
    }
    Ok(opts)
}

fn cell_colors(cell: OverlayCell) -> (Color, Color) {
    match cell {
        OverlayCell::Walkable => (Color::DarkGrey, Color::Grey),
        OverlayCell::Blocked => (Color::Red, Color::DarkRed),
        OverlayCell::Path => (Color::White, Color::Black),
    }
}

fn draw(out: &mut impl Write, world: &World, status: &str) -> io::Result<()> {
    let grid = world.tracker.grid();
    let overlay = Overlay::new(grid, world.slot.last());
    let player = grid.nearest_point(world.player);
    let hunter = grid.nearest_point(world.hunter);

    queue!(out, cursor::MoveTo(0, 0))?;
    for (y, row) in overlay.rows().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            let p = Point::new(x as i32, y as i32);
            let (fg, bg) = cell_colors(cell);
            let glyph = if Some(p) == player {
                '@'
            } else if Some(p) == hunter {
                'H'
            } else {
                cell.glyph()
            };
            queue!(
                out,
                SetForegroundColor(fg),
                SetBackgroundColor(bg),
                Print(glyph),
                Print(' ')
            )?;
        }
        queue!(out, ResetColor, Print("\r\n"))?;
    }
    queue!(
        out,
        terminal::Clear(ClearType::CurrentLine),
        Print(status),
        Print("\r\n")
    )?;
    out.flush()
}

fn run(opts: &Options) -> io::Result<()> {
    let config = GridConfig::with_chunk_size(opts.chunk);
    let mut world =
        World::new(opts.seed, config).map_err(|e| io::Error::other(e.to_string()))?;
    world.algorithm = opts.algorithm;

    let mut stdout = io::stdout();
    execute!(stdout, terminal::Clear(ClearType::All), cursor::Hide)?;

    for _ in 0..opts.ticks {
        let status = match world.step() {
            Ok(report) => format!(
                "tick {:>4}  {}  generation {}  path {}  cost {}{}",
                report.tick,
                world.algorithm.label(),
                world.tracker.grid().generation(),
                report
                    .path_len
                    .map_or("none".to_string(), |n| format!("{n} steps")),
                report.path_cost.map_or("-".to_string(), |c| c.to_string()),
                if report.rebuilt { "  [rebuilt]" } else { "" },
            ),
            Err(e) => format!("tick {:>4}  {e}", world.tick),
        };
        draw(&mut stdout, &world, &status)?;
        std::thread::sleep(Duration::from_millis(60));
    }

    execute!(stdout, ResetColor, cursor::Show)
}

fn main() {
    let opts = match parse_args(std::env::args().skip(1)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    if let Err(e) = run(&opts) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
