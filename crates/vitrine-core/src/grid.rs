//! Grid navigation: focused-cell movement and responsive column counts.
//!
//! The gallery is a 1D collection rendered as a 2D grid; navigation is
//! plain index arithmetic over the current column count. Moves that would
//! land outside the collection are rejected and the current index is kept.

/// Nominal pixel width of one terminal cell, used to map terminal columns
/// onto the pixel-based breakpoint table.
pub const CELL_WIDTH_PX: u16 = 8;

/// Arrow-key navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Compute the next focused index for an arrow-key move.
///
/// With no current focus every direction is a no-op. A computed move is
/// accepted only when it lands inside `[0, len)`; otherwise the current
/// index is returned unchanged.
pub fn next_index(
    current: Option<usize>,
    direction: Direction,
    columns: usize,
    len: usize,
) -> Option<usize> {
    let current = current?;

    let candidate = match direction {
        Direction::Up => current.checked_sub(columns),
        Direction::Down => current.checked_add(columns),
        Direction::Left => current.checked_sub(1),
        Direction::Right => current.checked_add(1),
    };

    match candidate {
        Some(next) if next < len => Some(next),
        _ => Some(current),
    }
}

/// Column count for a layout width, in logical pixels.
///
/// The upper tiers intentionally collapse to the same count.
pub fn column_count(width: u16) -> u16 {
    match width {
        w if w >= 1536 => 4,
        w if w >= 1280 => 4,
        w if w >= 960 => 4,
        w if w >= 600 => 2,
        _ => 1,
    }
}

/// Map a terminal width in cells to a logical pixel width for
/// [`column_count`].
pub fn logical_width(terminal_cols: u16) -> u16 {
    terminal_cols.saturating_mul(CELL_WIDTH_PX)
}
