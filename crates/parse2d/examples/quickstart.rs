//! Tokenize a small block diagram in two passes.
//!
//! The first pass extracts boxes and fills them with a solid sentinel; the
//! second traces the wires between them, which end in sockets on the filled
//! boxes, and picks up loose markers.
//!
//! Set `RUST_LOG=parse2d_tokenizer=debug` to watch the dispatcher.

use parse2d::prelude::*;
use std::error::Error;

/// Marks cells already consumed by a box.
const CONSUMED: char = '█';

const SHEET: &str = "\
┌────┐       ┌───┐
│ in │──┐    │out│
└────┘  │    └───┘
  *     └──────┘";

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn interior(boxed: &Diagram<char>) -> String {
    boxed
        .rows()
        .get(1)
        .map(|row| row.iter().skip(1).take(row.len().saturating_sub(2)).collect::<String>())
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let mut diagram = Diagram::from_text(SHEET);

    let boxes = BoxTokenizer::builder()
        .edge(Direction::Up, ['─'])
        .edge(Direction::Down, ['─'])
        .edge(Direction::Left, ['│'])
        .edge(Direction::Right, ['│'])
        .edge(Direction::UpLeft, ['┌'])
        .edge(Direction::UpRight, ['┐'])
        .edge(Direction::DownLeft, ['└'])
        .edge(Direction::DownRight, ['┘'])
        .contents(interior)
        .build()?;

    let found: Vec<Token<String>> = {
        let pass: [&dyn Tokenizer<char, String>; 1] = [&boxes];
        let mut tokens = tokenize(&diagram, &pass);
        let found = tokens.by_ref().filter_map(Result::ok).collect();
        println!("boxes cover {} cells", tokens.covered_len());
        found
    };
    for token in &found {
        if let Some(area) = token.region.bounding_box() {
            println!("box {:?} at {}..{}", token.value, area.top_left, area.bottom_right);
            let fill = vec![vec![CONSUMED; area.width()]; area.height()];
            diagram.set_slice(&area, &fill)?;
        }
    }

    let wires = WireTokenizer::new(SegmentTable::new([
        ('─', Translation::HORIZONTAL.to_vec()),
        ('│', Translation::VERTICAL.to_vec()),
        ('┌', vec![Translation::DOWN, Translation::RIGHT]),
        ('┐', vec![Translation::LEFT, Translation::DOWN]),
        ('└', vec![Translation::UP, Translation::RIGHT]),
        ('┘', vec![Translation::LEFT, Translation::UP]),
    ])?);
    let pass: [&dyn Tokenizer<char, Wire>; 1] = [&wires];
    for result in tokenize(&diagram, &pass) {
        match result {
            Ok(token) => {
                println!("wire over {} cells", token.region.len());
                for socket in token.value.sockets() {
                    println!("  socket at {} facing {}", socket.location, socket.direction);
                }
            }
            Err(err) => println!("skipped: {err}"),
        }
    }

    let star = TinyTokenizer::new('*', "marker");
    let pass: [&dyn Tokenizer<char, &str>; 1] = [&star];
    for token in tokenize(&diagram, &pass).filter_map(Result::ok) {
        if let Some(at) = token.region.location() {
            println!("{} at {at}", token.value);
        }
    }

    Ok(())
}
