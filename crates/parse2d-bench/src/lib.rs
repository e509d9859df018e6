//! Benchmark sheets for parse2d.
//!
//! Deterministic diagram generators sized for benchmarking:
//!
//! - [`box_sheet`]: a grid of small light-line boxes
//! - [`serpentine_wire`]: one long wire folded back and forth
//! - [`symbol_field`]: a scatter of `a`/`b` symbols

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use parse2d_grid::Diagram;

/// `cols` x `rows` boxes, each 4x3 with a two-letter interior, one blank
/// column apart.
pub fn box_sheet(cols: usize, rows: usize) -> Diagram<char> {
    let mut lines = Vec::with_capacity(rows * 3);
    for _ in 0..rows {
        for part in ["┌──┐ ", "│ab│ ", "└──┘ "] {
            lines.push(part.repeat(cols));
        }
    }
    Diagram::from_text(&lines.join("\n"))
}

/// A single wire `width` cells wide folding down `height` rows.
///
/// Every cell of the wire is a segment, so tracing it visits
/// `width * height` cells.
pub fn serpentine_wire(width: usize, height: usize) -> Diagram<char> {
    let width = width.max(2);
    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let down = row + 1 < height;
        let (first, last) = if row % 2 == 0 {
            (if row == 0 { '─' } else { '└' }, if down { '┐' } else { '─' })
        } else {
            (if down { '┌' } else { '─' }, '┘')
        };
        lines.push(format!("{first}{}{last}", "─".repeat(width - 2)));
    }
    Diagram::from_text(&lines.join("\n"))
}

/// A `width` x `height` field where roughly half the cells hold `a` or
/// `b`, laid out by a fixed multiplicative hash.
pub fn symbol_field(width: usize, height: usize) -> Diagram<char> {
    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let h = ((y * width + x) as u64).wrapping_mul(6364136223846793007) >> 61;
                    match h {
                        0..=1 => 'a',
                        2..=3 => 'b',
                        _ => ' ',
                    }
                })
                .collect()
        })
        .collect();
    Diagram::from_rows(rows, ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_sheet_has_expected_symbols() {
        let sheet = box_sheet(3, 2);
        assert_eq!(sheet.height(), 6);
        assert_eq!(sheet.len(), 3 * 2 * 12);
    }

    #[test]
    fn serpentine_alternates_turns() {
        let wire = serpentine_wire(4, 3);
        assert_eq!(wire.to_string(), "───┐\n┌──┘\n└───");
    }

    #[test]
    fn symbol_field_is_deterministic() {
        assert_eq!(symbol_field(20, 20), symbol_field(20, 20));
    }
}
