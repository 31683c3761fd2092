//! Footer rendering: navigation controls, progress bar and nav bar

use super::{HitMap, HitTarget};
use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use crate::presentation::Presentation;
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
};

const CONTROL_WIDTH: u16 = 3;

/// `n / N` counter text
pub fn counter_label(presentation: &Presentation) -> String {
    if presentation.is_empty() {
        "0 / 0".to_string()
    } else {
        format!("{} / {}", presentation.current_index() + 1, presentation.len())
    }
}

/// Centered `[prev, counter, next]` rectangles on one row
pub fn control_rects(area: Rect, counter_width: u16) -> [Rect; 3] {
    Layout::horizontal([
        Constraint::Length(CONTROL_WIDTH),
        Constraint::Length(counter_width),
        Constraint::Length(CONTROL_WIDTH),
    ])
    .flex(Flex::Center)
    .spacing(1)
    .areas(area)
}

/// Render `‹ n / N ›` and register the two controls
pub fn render_controls(f: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let presentation = &state.presentation;
    let navigation = presentation.navigation();
    let counter = counter_label(presentation);
    let [prev, middle, next] = control_rects(area, counter.chars().count() as u16 + 2);

    let control_style = |disabled: bool| {
        if disabled {
            Styles::control_disabled()
        } else {
            Styles::control()
        }
    };

    f.render_widget(
        Paragraph::new(" ‹ ").style(control_style(navigation.is_at_start())),
        prev,
    );
    f.render_widget(
        Paragraph::new(counter)
            .style(Styles::text_muted().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        middle,
    );
    f.render_widget(
        Paragraph::new(" › ").style(control_style(navigation.is_at_end())),
        next,
    );

    hits.push(prev, HitTarget::Prev);
    hits.push(next, HitTarget::Next);
}

/// Render the progress bar, `display id / N`
pub fn render_progress(f: &mut Frame, area: Rect, presentation: &Presentation) {
    let label = match presentation.current_slide() {
        Some(slide) => format!("{} / {}", slide.id, presentation.len()),
        None => String::new(),
    };
    let gauge = Gauge::default()
        .gauge_style(Styles::progress())
        .ratio(presentation.progress_ratio().clamp(0.0, 1.0))
        .label(Span::styled(label, Style::default().fg(Colors::FG_PRIMARY)))
        .use_unicode(true);
    f.render_widget(gauge, area);
}

/// Right-hand nav bar text: the start hint on the first slide, otherwise the
/// latest status message
pub fn status_text(state: &AppState) -> String {
    let presentation = &state.presentation;
    if !presentation.is_empty() && presentation.navigation().is_at_start() {
        "[Space] to Start".to_string()
    } else {
        state.status_message.clone()
    }
}

/// Render key hints on the left and the status message on the right
pub fn render_nav_bar(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
) {
    let items = keybinding_ctx.get_nav_items(&state.mode(), state.toggle_enabled);

    let mut spans: Vec<Span> = Vec::new();
    for item in items {
        spans.push(Span::styled(
            format!(" {} ", item.key_display),
            Style::default()
                .fg(Colors::FG_INVERSE)
                .bg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}  ", item.action_label), Styles::nav_hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);

    let status = status_text(state);
    if !status.is_empty() {
        f.render_widget(
            Paragraph::new(format!("{} ", status))
                .style(Styles::nav_hint())
                .alignment(Alignment::Right),
            area,
        );
    }
}
