use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).clamp(20, 52);
    let popup_height = area.height.saturating_sub(4).clamp(8, 22);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let lines: Vec<Line> = vec![
        Line::styled("Navigation", section_style),
        Line::raw("  j/k or Up/Down      Move selection"),
        Line::raw("  PageUp/PageDown     Page"),
        Line::raw("  g / G               Top / bottom"),
        Line::raw("  l / Right / Enter   Enter directory"),
        Line::raw("  h / Left / Bksp     Back to parent"),
        Line::raw(""),
        Line::styled("View", section_style),
        Line::raw("  i                   Re-root at selection"),
        Line::raw("  o                   Back to true root"),
        Line::raw("  s                   Cycle sort mode"),
        Line::raw(""),
        Line::styled("Other", section_style),
        Line::raw("  q / Esc / Ctrl-c    Quit"),
        Line::raw("  ? / F1              Toggle help"),
        Line::raw(""),
        Line::styled("  any key closes", dim_style),
    ];

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
