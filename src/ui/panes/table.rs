//! Transition table pane
//!
//! Lists the machine's accepting states and every instruction slot in
//! state-major order. The instruction that fires on the next step is
//! highlighted; slots with no target are shown as `?`.

use super::utils::{clamp_scroll, pane_block, visible_rows};
use crate::automaton::{symbol::fmt_operand, PdaDefinition, TransitionKey};
use crate::playback::View;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Render the transition table pane
pub fn render_table_pane(
    frame: &mut Frame,
    area: Rect,
    definition: &PdaDefinition,
    view: View,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Transitions ", is_focused);

    // Key of the instruction about to fire, if any
    let next_key = match view {
        View::Configuration(configuration) => configuration
            .state
            .index()
            .zip(configuration.remaining.first())
            .map(|(state, symbol)| TransitionKey::new(state, symbol.clone())),
        View::Verdict(_) => None,
    };

    let accepting: Vec<String> = definition
        .accepting_states()
        .iter()
        .map(|state| format!("q{}", state))
        .collect();

    let mut all_items = vec![ListItem::new(Line::from(vec![
        Span::styled("accepting ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("{{ {} }}", accepting.join(", ")),
            Style::default().fg(DEFAULT_THEME.state),
        ),
    ]))];

    let rows = definition.instructions();
    if rows.is_empty() {
        all_items.push(
            ListItem::new("(no instructions)").style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    }

    for (key, instruction) in rows {
        let target_span = match instruction.target {
            Some(target) => Span::styled(target.to_string(), Style::default().fg(DEFAULT_THEME.state)),
            None => Span::styled("?", Style::default().fg(DEFAULT_THEME.error)),
        };
        let marker_style = Style::default().fg(DEFAULT_THEME.marker);
        let line = Line::from(vec![
            Span::styled(
                format!("q{:<3}", key.state),
                Style::default().fg(DEFAULT_THEME.state),
            ),
            Span::styled(
                format!("{:<4}", key.symbol.to_string()),
                Style::default().fg(DEFAULT_THEME.symbol),
            ),
            Span::styled("→ ", Style::default().fg(DEFAULT_THEME.comment)),
            target_span,
            Span::styled("  pop ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(fmt_operand(instruction.pop.as_ref()).to_string(), marker_style),
            Span::styled("  push ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(fmt_operand(instruction.push.as_ref()).to_string(), marker_style),
        ]);

        let mut item = ListItem::new(line);
        if next_key.as_ref() == Some(&key) {
            item = item.style(
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD),
            );
        }
        all_items.push(item);
    }

    let visible_height = visible_rows(area);
    clamp_scroll(scroll_offset, all_items.len(), visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
