//! Shape properties of the box and wire tokenizers over generated sheets.

use parse2d_core::{Index, Translation};
use parse2d_grid::{AnyRegion, Diagram, RectRegion, Region};
use parse2d_test_utils::fixtures;
use parse2d_tokenizer::Tokenizer;
use parse2d_tokenizers::WireSocket;
use proptest::prelude::*;

/// A `width` x `height` light box filled with `x`, shifted by `(dx, dy)`.
fn boxed(width: usize, height: usize, dx: usize, dy: usize) -> String {
    let pad = " ".repeat(dx);
    let mut rows = vec![String::new(); dy];
    rows.push(format!("{pad}┌{}┐", "─".repeat(width - 2)));
    for _ in 0..height - 2 {
        rows.push(format!("{pad}│{}│", "x".repeat(width - 2)));
    }
    rows.push(format!("{pad}└{}┘", "─".repeat(width - 2)));
    rows.join("\n")
}

/// A closed `width` x `height` rectangular wire.
fn closed_loop(width: usize, height: usize) -> String {
    let mut rows = vec![format!("┌{}┐", "─".repeat(width - 2))];
    for _ in 0..height - 2 {
        rows.push(format!("│{}│", " ".repeat(width - 2)));
    }
    rows.push(format!("└{}┘", "─".repeat(width - 2)));
    rows.join("\n")
}

fn border(width: i32, height: i32) -> impl Iterator<Item = Index> {
    (0..height)
        .flat_map(move |y| (0..width).map(move |x| Index::new(x, y)))
        .filter(move |p| p.x == 0 || p.y == 0 || p.x == width - 1 || p.y == height - 1)
}

proptest! {
    #[test]
    fn box_traced_from_every_border_cell(
        width in 3usize..10,
        height in 3usize..7,
        dx in 0usize..4,
        dy in 0usize..3,
    ) {
        let boxes = fixtures::light_box();
        let diagram = Diagram::from_text(&boxed(width, height, dx, dy));
        let (w, h, ox, oy) = (width as i32, height as i32, dx as i32, dy as i32);
        let expected = AnyRegion::from(RectRegion::new(
            Index::new(ox, oy),
            Index::new(ox + w, oy + h),
        ));
        let interior = vec!["x".repeat(width - 2); height - 2].join("\n");

        for cell in border(w, h) {
            let start = Index::new(cell.x + ox, cell.y + oy);
            let token = boxes.extract_token(&diagram, start).unwrap();
            prop_assert_eq!(&token.region, &expected);
            prop_assert_eq!(&token.value, &interior);
        }
    }

    #[test]
    fn straight_wire_has_two_sockets(length in 1usize..30, start in 0usize..30) {
        let start = start % length;
        let diagram = Diagram::from_text(&format!("a{}b", "─".repeat(length)));
        let token = fixtures::light_wires()
            .extract_token(&diagram, Index::new(start as i32 + 1, 0))
            .unwrap();

        prop_assert_eq!(token.region.len(), length);
        prop_assert_eq!(token.value.len(), 2);
        prop_assert!(token.value.contains(&WireSocket::new(Index::new(0, 0), Translation::RIGHT)));
        prop_assert!(token
            .value
            .contains(&WireSocket::new(Index::new(length as i32 + 1, 0), Translation::LEFT)));
    }

    #[test]
    fn loop_is_closed_from_any_cell(width in 2usize..10, height in 2usize..7) {
        let wires = fixtures::light_wires();
        let diagram = Diagram::from_text(&closed_loop(width, height));
        let (w, h) = (width as i32, height as i32);
        let perimeter = border(w, h).count();

        for start in border(w, h) {
            let token = wires.extract_token(&diagram, start).unwrap();
            prop_assert!(token.value.is_empty());
            prop_assert_eq!(token.region.len(), perimeter);
            prop_assert!(border(w, h).all(|p| token.region.contains(p)));
        }
    }
}
