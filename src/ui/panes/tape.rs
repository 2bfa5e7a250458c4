//! Input tape pane: current state, consumed/remaining input, verdict banner

use super::utils::pane_block;
use crate::automaton::Symbol;
use crate::engine::Verdict;
use crate::playback::View;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Data needed to render the tape pane
pub struct TapeRenderData<'a> {
    pub machine_name: &'a str,
    /// Full tokenized input of the run
    pub input: &'a [Symbol],
    pub view: View<'a>,
    /// Input being typed, when in edit mode
    pub edit_buffer: Option<&'a str>,
}

/// Render the tape pane
pub fn render_tape_pane(frame: &mut Frame, area: Rect, data: TapeRenderData, is_focused: bool) {
    let title = format!(" Input · {} ", data.machine_name);
    let block = pane_block(&title, is_focused);

    let mut lines = Vec::new();

    if let Some(buffer) = data.edit_buffer {
        lines.push(Line::from(vec![
            Span::styled("edit ▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled("█", Style::default().fg(DEFAULT_THEME.secondary)),
        ]));
        lines.push(Line::from(Span::styled(
            "↵ run · esc cancel",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    match data.view {
        View::Configuration(configuration) => {
            let consumed = data.input.len().saturating_sub(configuration.remaining.len());

            lines.push(Line::from(vec![
                Span::styled("state ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    configuration.state.to_string(),
                    Style::default()
                        .fg(DEFAULT_THEME.state)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));

            let mut tape = vec![Span::styled("tape  ", Style::default().fg(DEFAULT_THEME.comment))];
            if data.input.is_empty() {
                tape.push(Span::styled("ε", Style::default().fg(DEFAULT_THEME.marker)));
            }
            for (index, symbol) in data.input.iter().enumerate() {
                let style = if index < consumed {
                    Style::default().fg(DEFAULT_THEME.consumed)
                } else if index == consumed {
                    Style::default()
                        .fg(Color::Black)
                        .bg(DEFAULT_THEME.symbol)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(DEFAULT_THEME.symbol)
                };
                tape.push(Span::styled(symbol.to_string(), style));
            }
            lines.push(Line::from(tape));
        }
        View::Verdict(verdict) => {
            let (label, color) = match verdict {
                Verdict::Accepted => (" ACCEPTED ", DEFAULT_THEME.success),
                Verdict::Rejected(_) => (" REJECTED ", DEFAULT_THEME.error),
            };
            lines.push(Line::from(Span::styled(
                label,
                Style::default()
                    .bg(color)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )));
            if let Some(rejection) = verdict.rejection() {
                lines.push(Line::from(Span::styled(
                    rejection.to_string(),
                    Style::default().fg(DEFAULT_THEME.error),
                )));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
