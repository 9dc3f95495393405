use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::Model;

use super::{format, overlays, status, MIN_HEIGHT, MIN_WIDTH, SIZE_COL_WIDTH};

/// Render the complete UI.
///
/// Pure projection of the model: header, column header, one row per visible
/// child, status bar, and the help overlay on top when active.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        frame.render_widget(Paragraph::new("Terminal too small"), area);
        return;
    }

    let header_area = Rect { height: 1, ..area };
    let column_area = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    let listing_area = Rect {
        y: area.y + 2,
        height: area.height.saturating_sub(super::CHROME_ROWS),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    render_header(model, frame, header_area);
    render_column_header(frame, column_area);
    render_listing(model, frame, listing_area);
    status::render_status_bar(model, frame, status_area);

    if model.help_visible {
        overlays::render_help_overlay(frame, area);
    }
}

fn render_header(model: &Model, frame: &mut Frame, area: Rect) {
    let header = format!(
        "Path: {}  [Sort: {}]",
        model.header_path(),
        model.sort_mode.label()
    );
    let widget = Paragraph::new(header).style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(widget, area);
}

fn render_column_header(frame: &mut Frame, area: Rect) {
    let text = format!("{:>width$}  NAME", "SIZE", width = SIZE_COL_WIDTH);
    let widget = Paragraph::new(text).style(Style::default().add_modifier(Modifier::UNDERLINED));
    frame.render_widget(widget, area);
}

fn render_listing(model: &Model, frame: &mut Frame, area: Rect) {
    if model.display.is_empty() {
        let empty = Paragraph::new("  (empty)").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let total = model.display.len();
    let rows: Vec<Line> = model
        .viewport
        .visible_range()
        .filter_map(|idx| model.display.get(idx).map(|&id| (idx, id)))
        .map(|(idx, id)| {
            let node = model.tree.node(id);
            let connector = match (model.ascii, idx == total - 1) {
                (true, true) => "+-- ",
                (true, false) => "|-- ",
                (false, true) => "\u{2514}\u{2500}\u{2500} ",
                (false, false) => "\u{251c}\u{2500}\u{2500} ",
            };
            let marker = if model.tree.has_children(id) { "/" } else { "" };
            let mut text = format!(
                "{:>width$}  {}{}{}",
                format::human_size(node.size_kb()),
                connector,
                node.name(),
                marker,
                width = SIZE_COL_WIDTH
            );
            if idx == model.viewport.selected() {
                // Pad so the reversed style covers the full row width.
                let pad = (area.width as usize).saturating_sub(text.width());
                text.extend(std::iter::repeat_n(' ', pad));
                Line::styled(text, Style::default().add_modifier(Modifier::REVERSED))
            } else {
                Line::raw(text)
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(rows), area);
}
