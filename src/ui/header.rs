//! Module dock rendering
//!
//! One anchor per module, centered on the top row. Anchors sharing the current
//! module's short name are wider and carry their module color; the current module's full
//! name sits under the dock. When the slide-set toggle is offered, a badge
//! naming the active set occupies the right end of the top row.

use super::{HitMap, HitTarget};
use crate::app::AppState;
use crate::module_index::Module;
use crate::theme::{Colors, Styles, UiConstants};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Label of the deck badge for the given inclusion flag
pub fn deck_badge_label(include_all: bool) -> &'static str {
    if include_all { " ◉ FULL " } else { " ○ REDUCED " }
}

/// Whether `module`'s anchor is highlighted while `current` is shown.
///
/// Matches on the short name, so every anchor sharing it lights up.
pub fn is_active_anchor(module: &Module, current: Option<&Module>) -> bool {
    current.is_some_and(|c| c.name == module.name)
}

/// Lay out one anchor per entry of `active`, centered in `area`.
///
/// Active anchors get the wide width. Anchors that would not fit entirely
/// inside `area` are dropped, so the result may be shorter than `active`.
pub fn anchor_rects(area: Rect, active: &[bool]) -> Vec<Rect> {
    let count = active.len();
    let width_of = |rank: usize| {
        if active[rank] {
            UiConstants::ANCHOR_ACTIVE_WIDTH
        } else {
            UiConstants::ANCHOR_WIDTH
        }
    };

    let total: u32 = (0..count).map(|r| u32::from(width_of(r))).sum::<u32>()
        + u32::from(UiConstants::ANCHOR_GAP) * count.saturating_sub(1) as u32;
    let slack = u32::from(area.width).saturating_sub(total);
    let mut x = u32::from(area.x) + slack / 2;
    let right = u32::from(area.x) + u32::from(area.width);

    let mut rects = Vec::with_capacity(count);
    for rank in 0..count {
        let width = width_of(rank);
        if x + u32::from(width) > right {
            break;
        }
        // x + width <= right, which is itself a u16 sum
        rects.push(Rect::new(x as u16, area.y, width, area.height.min(1)));
        x += u32::from(width) + u32::from(UiConstants::ANCHOR_GAP);
    }
    rects
}

/// Render the dock and register anchor and badge regions
pub fn render_dock(f: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let presentation = &state.presentation;
    let modules = presentation.modules();
    let current = presentation.current_module();
    let active: Vec<bool> = modules
        .modules()
        .iter()
        .map(|m| is_active_anchor(m, current))
        .collect();

    let mut anchor_row = rows[0];
    if state.toggle_enabled {
        let label = deck_badge_label(presentation.include_all());
        let width = (label.chars().count() as u16).min(anchor_row.width);
        let badge = Rect::new(
            anchor_row.right().saturating_sub(width),
            anchor_row.y,
            width,
            1,
        );
        f.render_widget(Paragraph::new(label).style(Styles::badge()), badge);
        hits.push(badge, HitTarget::DeckBadge);
        anchor_row.width = anchor_row.width.saturating_sub(width + 1);
    }

    let rects = anchor_rects(anchor_row, &active);
    for ((module, rect), is_active) in modules.modules().iter().zip(rects).zip(active) {
        let style = if is_active {
            Style::default()
                .fg(Colors::FG_PRIMARY)
                .bg(module.color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Colors::FG_MUTED)
                .bg(Colors::ANCHOR_INACTIVE)
        };
        let label = format!("{:^width$}", module.rank + 1, width = rect.width as usize);
        f.render_widget(Paragraph::new(label).style(style), rect);
        hits.push(rect, HitTarget::Anchor(module.rank));
    }

    if let Some(module) = current {
        let name = Paragraph::new(Line::from(vec![
            Span::styled("● ", Style::default().fg(module.color)),
            Span::styled(module.full_name.clone(), Styles::text_muted()),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(name, rows[1]);
    }
}
