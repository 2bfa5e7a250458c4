//! Stack pane rendering
//!
//! The stack is drawn top-first so the symbol the next instruction will
//! inspect sits on the first row. The bottom marker is always the last row.

use super::utils::{clamp_scroll, pane_block, stack_cell_span, visible_rows};
use crate::playback::View;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render the stack pane
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    view: View,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Stack ", is_focused);

    let View::Configuration(configuration) = view else {
        let paragraph = Paragraph::new("(run finished)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let depth = configuration.stack.len();
    let all_items: Vec<ListItem> = configuration
        .stack
        .iter()
        .rev()
        .enumerate()
        .map(|(row, cell)| {
            let marker = if row == 0 { "top ▸ " } else { "      " };
            let mut cell_span = stack_cell_span(cell);
            if row == 0 {
                cell_span = cell_span.patch_style(Style::default().add_modifier(Modifier::BOLD));
            }
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(
                    format!("{:>3} ", depth - 1 - row),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                cell_span,
            ]))
        })
        .collect();

    let visible_height = visible_rows(area);
    clamp_scroll(scroll_offset, all_items.len(), visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
