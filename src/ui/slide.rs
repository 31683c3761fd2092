//! Slide rendering
//!
//! One renderer per layout. Asset panels show the resolved asset name once
//! the load has finished and a placeholder until then.

use crate::app::AppState;
use crate::assets::AssetRef;
use crate::deck::ActiveSlide;
use crate::loader::AssetBoard;
use crate::theme::{Colors, Styles, UiConstants};
use crate::types::{ChartPoint, LayoutType};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph, Wrap},
};

/// Display ids drawn with the asset panel on the right
pub const MIRRORED_SLIDES: [u32; 2] = [22, 24];

/// Split `text` into runs, flagging numeric tokens.
///
/// A token is `\d+([.,]\d+)?%?`: digits, at most one decimal or thousands
/// group, and an optional trailing percent sign.
pub fn split_numeric_tokens(text: &str) -> Vec<(&str, bool)> {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut parts = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = digits_from(i);
        if end + 1 < bytes.len()
            && matches!(bytes[end], b'.' | b',')
            && bytes[end + 1].is_ascii_digit()
        {
            end = digits_from(end + 1);
        }
        if end < bytes.len() && bytes[end] == b'%' {
            end += 1;
        }

        if plain_start < start {
            parts.push((&text[plain_start..start], false));
        }
        parts.push((&text[start..end], true));
        plain_start = end;
        i = end;
    }

    if plain_start < text.len() {
        parts.push((&text[plain_start..], false));
    }
    parts
}

/// `text` as a line with numeric tokens emphasized
pub fn highlight_numbers(text: &str, base: Style) -> Line<'static> {
    Line::from(
        split_numeric_tokens(text)
            .into_iter()
            .map(|(part, numeric)| {
                if numeric {
                    Span::styled(part.to_string(), Styles::highlight_number())
                } else {
                    Span::styled(part.to_string(), base)
                }
            })
            .collect::<Vec<_>>(),
    )
}

/// `#NN` slide number
pub fn slide_number(id: u32) -> String {
    format!("#{:02}", id)
}

/// Whether the asset panel goes on the right for this slide
pub fn is_mirrored(slide: &ActiveSlide) -> bool {
    slide.layout_type == LayoutType::Standard && MIRRORED_SLIDES.contains(&slide.id)
}

/// Render the slide at the current position
pub fn render_current_slide(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(slide) = state.presentation.current_slide() else {
        let empty = Paragraph::new("No slides to present")
            .style(Styles::text_muted())
            .alignment(Alignment::Center);
        f.render_widget(empty, centered_row(area));
        return;
    };

    let board = &state.assets;
    match slide.layout_type {
        LayoutType::Cover => render_cover(f, area, slide, board),
        LayoutType::Pdf => render_document_page(f, area, slide, board),
        LayoutType::Comparison => {
            let inner = card(f, area);
            render_comparison(f, inner, slide);
        }
        LayoutType::Qr => {
            let inner = card(f, area);
            render_qr(f, inner, slide, board);
        }
        LayoutType::Standard => {
            let inner = card(f, area);
            render_standard(f, inner, slide, board);
        }
    }

    if slide.layout_type.shows_module_label() {
        render_module_label(f, area, slide);
    }
}

/// Draw the rounded card and return its inner area
fn card(f: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::border())
        .style(Style::default().bg(Colors::BG_CARD));
    let inner = block.inner(area);
    f.render_widget(block, area);
    inner
}

fn centered_row(area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    row
}

fn render_module_label(f: &mut Frame, area: Rect, slide: &ActiveSlide) {
    let label = format!(" {} ", slide.module_short_name());
    let width = (label.chars().count() as u16).min(area.width.saturating_sub(2));
    if width == 0 || area.height < 2 {
        return;
    }
    let x = if is_mirrored(slide) {
        area.x + 2
    } else {
        area.right().saturating_sub(width + 2)
    };
    f.render_widget(
        Paragraph::new(label).style(Styles::module_label()),
        Rect::new(x, area.y, width, 1),
    );
}

fn render_asset_panel(f: &mut Frame, area: Rect, asset: &AssetRef, board: &AssetBoard) {
    let (style, text) = if board.is_ready(asset) {
        (Styles::asset_ready(), format!("▣ {}", asset.file_name()))
    } else {
        (Styles::placeholder(), format!("loading {}…", asset.file_name()))
    };
    f.render_widget(Block::default().style(style), area);
    f.render_widget(
        Paragraph::new(text).style(style).alignment(Alignment::Center),
        centered_row(area),
    );
}

fn render_cover(f: &mut Frame, area: Rect, slide: &ActiveSlide, board: &AssetBoard) {
    render_asset_panel(f, area, &slide.image, board);

    let mut lines = vec![
        Line::from(Span::styled("✦", Style::default().fg(Colors::PRIMARY))),
        Line::from(""),
        Line::from(Span::styled(
            slide.title.clone(),
            Styles::title().add_modifier(Modifier::UNDERLINED),
        )),
    ];
    if let Some(subtitle) = slide.content.first() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            subtitle.clone(),
            Style::default()
                .fg(Colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("[ Press Space ]", Styles::text_muted())));

    let height = lines.len() as u16 + 2;
    let width = area.width.saturating_sub(8).min(72);
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [panel] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Colors::FG_INVERSE))
        .style(Style::default().bg(Colors::BG_CARD));
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        panel,
    );
}

fn render_document_page(f: &mut Frame, area: Rect, slide: &ActiveSlide, board: &AssetBoard) {
    f.render_widget(Block::default().style(Style::default().bg(Colors::BG_DOCUMENT)), area);
    render_asset_panel(f, area, &slide.image, board);

    let overlay = Style::default()
        .fg(Colors::FG_INVERSE)
        .bg(Colors::BG_DOCUMENT)
        .add_modifier(Modifier::BOLD);
    let title = format!(" {} ", slide.title);
    let title_width = (title.chars().count() as u16).min(area.width);
    f.render_widget(
        Paragraph::new(title).style(overlay),
        Rect::new(area.x, area.y, title_width, area.height.min(1)),
    );

    let number = slide_number(slide.id);
    let width = number.len() as u16 + 2;
    if area.height >= 2 && area.width >= width {
        f.render_widget(
            Paragraph::new(format!(" {} ", number)).style(Styles::text_muted().bg(Colors::BG_DOCUMENT)),
            Rect::new(area.right() - width, area.bottom() - 1, width, 1),
        );
    }
}

fn render_comparison(f: &mut Frame, area: Rect, slide: &ActiveSlide) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Cards
            Constraint::Length(5), // Insight
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(slide.title.clone(), Styles::title())))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::NONE)),
        centered_row(chunks[0]),
    );

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(2)
        .split(chunks[1].inner(Margin::new(2, 0)));

    let colors = [Colors::PRIMARY, Colors::SECONDARY];
    for (i, rect) in cards.iter().enumerate() {
        let text = slide.content.get(i).cloned().unwrap_or_default();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(colors[i]));
        let inner = block.inner(*rect);
        f.render_widget(block, *rect);
        f.render_widget(
            Paragraph::new(text)
                .style(Styles::text().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            centered_row(inner),
        );
    }

    if !slide.data_support.is_empty() {
        let insight = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Colors::FG_INVERSE))
            .style(Style::default().bg(Colors::ACCENT));
        f.render_widget(
            Paragraph::new(format!("\u{201c} {} \u{201d}", slide.data_support))
                .style(
                    Style::default()
                        .fg(Colors::FG_INVERSE)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(insight),
            chunks[2].inner(Margin::new(4, 0)),
        );
    }
}

fn render_qr(f: &mut Frame, area: Rect, slide: &ActiveSlide, board: &AssetBoard) {
    let content_rows = slide.content.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(content_rows),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(slide.title.clone(), Styles::title())))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let square = chunks[1].height.saturating_mul(2).min(chunks[1].width);
    let [code] = Layout::horizontal([Constraint::Length(square)])
        .flex(Flex::Center)
        .areas(chunks[1]);
    render_asset_panel(f, code, &slide.image, board);

    f.render_widget(
        Paragraph::new(highlight_numbers(&slide.data_support, Styles::text()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().style(Style::default().bg(Colors::BG_MUTED))),
        chunks[2],
    );

    let items: Vec<Line> = slide
        .content
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("— {} —", item),
                Styles::text_muted().add_modifier(Modifier::ITALIC),
            ))
        })
        .collect();
    f.render_widget(Paragraph::new(items).alignment(Alignment::Center), chunks[3]);
}

fn render_standard(f: &mut Frame, area: Rect, slide: &ActiveSlide, board: &AssetBoard) {
    let asset_share = Constraint::Percentage(UiConstants::ASSET_PANEL_PERCENT);
    let text_share = Constraint::Percentage(100 - UiConstants::ASSET_PANEL_PERCENT);

    let mirrored = is_mirrored(slide);
    let constraints = if mirrored {
        [text_share, asset_share]
    } else {
        [asset_share, text_share]
    };
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);
    let (asset_area, text_area) = if mirrored {
        (halves[1], halves[0])
    } else {
        (halves[0], halves[1])
    };

    render_standard_assets(f, asset_area, slide, board);
    render_standard_text(f, text_area, slide);
}

fn render_standard_assets(f: &mut Frame, area: Rect, slide: &ActiveSlide, board: &AssetBoard) {
    if let Some(video) = &slide.video {
        let style = Style::default().fg(Colors::FG_INVERSE).bg(Colors::BG_DOCUMENT);
        f.render_widget(Block::default().style(style), area);
        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("▶ video", style.add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(video.clone(), style)),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
            Layout::vertical([Constraint::Length(2)])
                .flex(Flex::Center)
                .split(area)[0],
        );
    } else if let Some([top, bottom]) = &slide.images {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(1)
            .split(area);
        render_asset_panel(f, rows[0], top, board);
        render_asset_panel(f, rows[1], bottom, board);
    } else {
        render_asset_panel(f, area, &slide.image, board);
    }

    let number = slide_number(slide.id);
    let width = number.len() as u16 + 2;
    if area.height >= 2 && area.width > width {
        f.render_widget(
            Paragraph::new(format!(" {} ", number)).style(Styles::badge()),
            Rect::new(area.x + 1, area.bottom() - 2, width, 1),
        );
    }
}

fn render_standard_text(f: &mut Frame, area: Rect, slide: &ActiveSlide) {
    let area = area.inner(Margin::new(3, 1));

    let mut constraints = vec![Constraint::Length(3)];
    if !slide.data_support.is_empty() {
        constraints.push(Constraint::Length(5));
    }
    if slide.chart_data.is_some() {
        constraints.push(Constraint::Length(10));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut next = 0;

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(slide.title.clone(), Styles::title())))
            .wrap(Wrap { trim: true }),
        chunks[next],
    );
    next += 1;

    if !slide.data_support.is_empty() {
        let bubble = Block::default()
            .title(Span::styled(
                " DATA INSIGHT ",
                Style::default()
                    .fg(Colors::SECONDARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Colors::SECONDARY));
        f.render_widget(
            Paragraph::new(highlight_numbers(&slide.data_support, Styles::text()))
                .wrap(Wrap { trim: true })
                .block(bubble),
            chunks[next],
        );
        next += 1;
    }

    if let Some(points) = &slide.chart_data {
        render_chart(f, chunks[next], points);
        next += 1;
    }

    let paragraphs: Vec<Line> = slide
        .content
        .iter()
        .flat_map(|p| [Line::from(Span::styled(p.clone(), Styles::text_muted())), Line::from("")])
        .collect();
    f.render_widget(
        Paragraph::new(paragraphs)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::LEFT)
                    .border_style(Style::default().fg(Colors::BG_MUTED)),
            ),
        chunks[next],
    );
}

/// Bar height for a chart point; costs are scaled to keep cents visible
pub fn bar_value(cost: f64) -> u64 {
    if cost.is_finite() && cost > 0.0 {
        (cost * 100.0).round() as u64
    } else {
        0
    }
}

fn render_chart(f: &mut Frame, area: Rect, points: &[ChartPoint]) {
    let bars: Vec<Bar> = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let color = if i == 0 { Colors::CHART_FIRST } else { Colors::CHART_REST };
            Bar::default()
                .value(bar_value(point.cost))
                .label(Line::from(point.year.to_string()))
                .text_value(point.label.clone())
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Colors::FG_INVERSE)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Colors::SECONDARY))
                .style(Style::default().bg(Colors::BG_MUTED)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(8)
        .bar_gap(4)
        .label_style(Styles::text_muted().add_modifier(Modifier::BOLD));
    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<&str> {
        split_numeric_tokens(text)
            .into_iter()
            .filter(|(_, numeric)| *numeric)
            .map(|(part, _)| part)
            .collect()
    }

    #[test]
    fn test_numeric_tokens() {
        assert_eq!(
            tokens("Cost dropped 99.2% between 2020 and 2024"),
            vec!["99.2%", "2020", "2024"]
        );
        assert_eq!(tokens("grew 340% in 18 months"), vec!["340%", "18"]);
        assert_eq!(tokens("1,5 and 3.14"), vec!["1,5", "3.14"]);
        assert!(tokens("no numbers here").is_empty());
    }

    #[test]
    fn test_only_one_decimal_group() {
        assert_eq!(tokens("1,234,567"), vec!["1,234", "567"]);
        assert_eq!(tokens("v1.2.3"), vec!["1.2", "3"]);
    }

    #[test]
    fn test_trailing_separator_is_plain_text() {
        let parts = split_numeric_tokens("Only 3. Then 4,");
        assert_eq!(
            parts,
            vec![
                ("Only ", false),
                ("3", true),
                (". Then ", false),
                ("4", true),
                (",", false)
            ]
        );
    }

    #[test]
    fn test_split_reassembles_input() {
        for text in ["", "42", "a1b22c333%", "end with 5%", "３ full-width digits 7"] {
            let joined: String = split_numeric_tokens(text).into_iter().map(|(p, _)| p).collect();
            assert_eq!(joined, text);
        }
    }

    #[test]
    fn test_highlight_styles_tokens() {
        let line = highlight_numbers("3 of 4 groups", Styles::text());
        let highlighted: Vec<String> = line
            .spans
            .iter()
            .filter(|s| s.style == Styles::highlight_number())
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(highlighted, vec!["3", "4"]);
    }

    #[test]
    fn test_slide_number_is_zero_padded() {
        assert_eq!(slide_number(4), "#04");
        assert_eq!(slide_number(43), "#43");
        assert_eq!(slide_number(120), "#120");
    }

    #[test]
    fn test_bar_value_scales_cents() {
        assert_eq!(bar_value(60.0), 6000);
        assert_eq!(bar_value(0.5), 50);
        assert_eq!(bar_value(-1.0), 0);
        assert_eq!(bar_value(f64::NAN), 0);
    }
}
