//! Placement of fixed-size blocks inside the terminal area.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::Line;

/// Places a `width` x `height` block inside `area`.
///
/// `horizontal` and `vertical` choose where the block sits on each axis;
/// a block larger than `area` is clipped to it.
pub fn place(area: Rect, width: u16, height: u16, horizontal: Flex, vertical: Flex) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(vertical)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(horizontal)
        .areas(row);
    cell
}

/// Returns the `(width, height)` needed to draw `lines` without wrapping.
pub fn block_size(lines: &[Line<'_>]) -> (u16, u16) {
    let width = lines.iter().map(Line::width).max().unwrap_or(0);
    (
        u16::try_from(width).unwrap_or(u16::MAX),
        u16::try_from(lines.len()).unwrap_or(u16::MAX),
    )
}
