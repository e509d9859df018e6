//! Sample diagrams and box-drawing tokenizers.

use parse2d_core::{Direction, Translation};
use parse2d_grid::Diagram;
use parse2d_tokenizers::{
    BoxTokenizer, SegmentTable, TemplateTokenizer, TinyTokenizer, WireTokenizer,
};

/// A 4x4 box around a 2x2 interior.
pub const BOXED: &str = "┌──┐\n│ab│\n│cd│\n└──┘";

/// A wire bending down between two terminals.
pub const BENT_WIRE: &str = "a─┐\n  └──b";

/// A closed rectangular wire.
pub const LOOP: &str = "┌─┐\n└─┘";

/// Boxes, wires and loose symbols on one sheet.
pub const MIXED: &str = "\
┌──┐    x─┐
│hi│      │
└──┘  y───┘
 a b  ┌─┐
 b a  └─┘";

/// The boxed sub-diagram with its border stripped, rows joined by `\n`.
pub fn box_interior(boxed: &Diagram<char>) -> String {
    let rows = boxed.rows();
    rows.iter()
        .skip(1)
        .take(rows.len().saturating_sub(2))
        .map(|row| {
            row.iter()
                .skip(1)
                .take(row.len().saturating_sub(2))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Boxes drawn with light box-drawing characters, valued by their interior.
pub fn light_box() -> BoxTokenizer<char, String> {
    BoxTokenizer::builder()
        .edge(Direction::Up, ['─'])
        .edge(Direction::UpRight, ['┐'])
        .edge(Direction::Right, ['│'])
        .edge(Direction::DownRight, ['┘'])
        .edge(Direction::Down, ['─'])
        .edge(Direction::DownLeft, ['└'])
        .edge(Direction::Left, ['│'])
        .edge(Direction::UpLeft, ['┌'])
        .contents(box_interior)
        .build()
        .expect("light box edges are complete")
}

/// Light box-drawing wire segments.
pub fn light_segments() -> SegmentTable<char> {
    SegmentTable::new([
        ('─', Translation::HORIZONTAL.to_vec()),
        ('│', Translation::VERTICAL.to_vec()),
        ('┌', vec![Translation::DOWN, Translation::RIGHT]),
        ('┐', vec![Translation::LEFT, Translation::DOWN]),
        ('└', vec![Translation::UP, Translation::RIGHT]),
        ('┘', vec![Translation::LEFT, Translation::UP]),
    ])
    .expect("segment table is non-empty")
}

/// Wires drawn with light box-drawing characters.
pub fn light_wires() -> WireTokenizer<SegmentTable<char>> {
    WireTokenizer::new(light_segments())
}

/// A two-cell diagonal template drawn as `"b\n b"`.
pub fn diagonal_template<V>(value: V) -> TemplateTokenizer<char, V> {
    TemplateTokenizer::from_diagram(&Diagram::from_text("b\n b"), value)
        .expect("template is non-empty")
}

/// Single-cell tokenizers for each of `symbols`, valued by the symbol.
pub fn tiny_symbols(symbols: &str) -> Vec<TinyTokenizer<char, char>> {
    symbols.chars().map(|s| TinyTokenizer::new(s, s)).collect()
}
