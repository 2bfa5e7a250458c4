//! Status bar rendering with keybindings and state indicators

use crate::playback::Mode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    /// Cursor in `[0, trace_len]`
    pub position: usize,
    pub trace_len: usize,
    pub mode: Mode,
    pub is_editing: bool,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let is_at_end = data.position >= data.trace_len;
    let step_text = if is_at_end {
        " Verdict ".to_string()
    } else {
        format!(" Step {}/{} ", data.position, data.trace_len.saturating_sub(1))
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(if data.is_editing {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↵ / ⌫ ", key_style),
        Span::styled(" end/start ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" i ", key_style),
        Span::styled(" input ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let indicator = if data.is_editing {
        Some((" ⌨ INPUT ", DEFAULT_THEME.secondary))
    } else if data.mode == Mode::Auto && !is_at_end {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if is_at_end {
        Some((" END ", DEFAULT_THEME.error))
    } else if data.position == 0 {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    };

    if let Some((label, color)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
