//! Shared helpers for pane rendering

use crate::automaton::StackSymbol;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
};

/// Bordered block with focus-dependent border style
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Number of list rows that fit inside a bordered area (min 1)
pub(crate) fn visible_rows(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp `offset` so the visible window stays inside `total_items`
pub(crate) fn clamp_scroll(offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        *offset = (*offset).min(total_items - visible_height);
    } else {
        *offset = 0;
    }
}

/// Scroll just enough to keep `row` inside the window
pub(crate) fn follow_row(offset: &mut usize, row: usize, visible_height: usize) {
    if row < *offset {
        *offset = row;
    } else if row >= *offset + visible_height {
        *offset = row + 1 - visible_height;
    }
}

pub(crate) fn stack_cell_span(cell: &StackSymbol) -> Span<'static> {
    match cell {
        StackSymbol::Bottom => Span::styled(
            cell.to_string(),
            Style::default().fg(DEFAULT_THEME.marker),
        ),
        StackSymbol::Symbol(symbol) => Span::styled(
            symbol.to_string(),
            Style::default().fg(DEFAULT_THEME.symbol),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_row() {
        let mut offset = 0;
        follow_row(&mut offset, 12, 5);
        assert_eq!(offset, 8);
        follow_row(&mut offset, 3, 5);
        assert_eq!(offset, 3);
        follow_row(&mut offset, 5, 5);
        assert_eq!(offset, 3);
    }

    #[test]
    fn test_clamp_scroll() {
        let mut offset = usize::MAX;
        clamp_scroll(&mut offset, 20, 5);
        assert_eq!(offset, 15);
        clamp_scroll(&mut offset, 3, 5);
        assert_eq!(offset, 0);
    }
}
