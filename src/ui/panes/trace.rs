//! Trace pane: every configuration of the run, with the cursor highlighted

use super::utils::{clamp_scroll, follow_row, pane_block, visible_rows};
use crate::engine::Verdict;
use crate::trace::Trace;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Data needed to render the trace pane
pub struct TraceRenderData<'a> {
    pub trace: &'a Trace,
    pub verdict: &'a Verdict,
    /// Cursor in `[0, trace.len()]`; `trace.len()` is the verdict row
    pub position: usize,
}

/// Render the trace pane
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    data: TraceRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Trace ", is_focused);
    let width = data.trace.len().to_string().len();

    let mut all_items: Vec<ListItem> = data
        .trace
        .iter()
        .enumerate()
        .map(|(index, configuration)| {
            let remaining = configuration.remaining_text();
            let line = Line::from(vec![
                Span::styled(
                    format!("{:>width$} ", index, width = width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:<4}", configuration.state.to_string()),
                    Style::default().fg(DEFAULT_THEME.state),
                ),
                Span::styled(
                    format!(
                        "{:<12} ",
                        if remaining.is_empty() { "ε" } else { remaining.as_str() }
                    ),
                    Style::default().fg(DEFAULT_THEME.symbol),
                ),
                Span::styled(
                    format!("[{}]", configuration.stack_text()),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let (verdict_text, verdict_color) = match data.verdict {
        Verdict::Accepted => ("✓ accepted".to_string(), DEFAULT_THEME.success),
        Verdict::Rejected(rejection) => (format!("✗ {}", rejection.kind()), DEFAULT_THEME.error),
    };
    all_items.push(ListItem::new(Line::from(Span::styled(
        format!("{:>width$} {}", "", verdict_text, width = width),
        Style::default().fg(verdict_color),
    ))));

    // Highlight the cursor row
    if let Some(item) = all_items.get_mut(data.position) {
        *item = item.clone().style(
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .add_modifier(Modifier::BOLD),
        );
    }

    let visible_height = visible_rows(area);
    follow_row(scroll_offset, data.position, visible_height);
    clamp_scroll(scroll_offset, all_items.len(), visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
