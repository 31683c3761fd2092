//! Help overlay component
//!
//! Displays the key bindings for the current mode in a centered window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::PresenterMode;
use crate::theme::Colors;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const WIDTH: u16 = 52;

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given mode
    pub fn new(mode: &PresenterMode, keybinding_ctx: &KeybindingContext, toggle_enabled: bool) -> Self {
        let sections = keybinding_ctx.get_help_content(mode, toggle_enabled);
        Self {
            content: Self::build_content(&sections),
        }
    }

    fn build_content(sections: &[HelpSection]) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(Span::styled(
                "  slidedeck  ",
                Style::default()
                    .fg(Colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for section in sections {
            lines.push(Line::from(Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<10}", key),
                        Style::default()
                            .fg(Colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Style::default().fg(Colors::FG_PRIMARY)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(Colors::FG_MUTED),
        )));

        lines
    }

    /// Lines the overlay will draw
    pub fn lines(&self) -> &[Line<'static>] {
        &self.content
    }

    /// Render the help overlay centered in `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let height = (self.content.len() as u16).saturating_add(2);
        let area = centered(parent, WIDTH, height);

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Colors::PRIMARY))
            .style(Style::default().bg(Colors::BG_CARD));

        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(self.content.clone())
                .block(block)
                .alignment(Alignment::Left),
            area,
        );
    }
}

/// A `width` x `height` rectangle centered in `parent`, clamped to fit
pub fn centered(parent: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(parent.height))])
        .flex(Flex::Center)
        .areas(parent);
    let [area] = Layout::horizontal([Constraint::Length(width.min(parent.width))])
        .flex(Flex::Center)
        .areas(row);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let area = centered(parent, 52, 20);
        assert_eq!(area.width, 52);
        assert_eq!(area.height, 20);
        assert_eq!(area.x, 24);
        assert_eq!(area.y, 10);

        let small = centered(Rect::new(0, 0, 30, 10), 52, 20);
        assert_eq!((small.width, small.height), (30, 10));
    }

    #[test]
    fn test_content_lists_sections() {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(&PresenterMode::Presenting, &ctx, true);
        let text: Vec<String> = overlay.lines().iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l.contains("Navigation")));
        assert!(text.iter().any(|l| l.contains("Full/reduced deck")));
        assert!(text.last().is_some_and(|l| l.contains("Esc to close")));
    }
}
