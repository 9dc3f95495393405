use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

const LEGEND: &str = " [q]uit [jk]move [l/Enter]enter [h]back [i]go-in [o]go-out [s]ort";

/// Key legend on the left, item count and skipped tally on the right.
///
/// The counts get their own right-aligned area so a narrow terminal clips
/// the legend tail, never the counts.
pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let style = Style::default().bg(Color::DarkGray).fg(Color::White);

    let skipped = model.tree.skipped_lines();
    let skipped_note = if skipped > 0 {
        format!("  [{skipped} lines skipped]")
    } else {
        String::new()
    };
    let counts = format!("{} items{} ", model.display.len(), skipped_note);

    let counts_width = u16::try_from(counts.len())
        .unwrap_or(area.width)
        .min(area.width);
    let legend_area = Rect {
        width: area.width.saturating_sub(counts_width),
        ..area
    };
    let counts_area = Rect {
        x: area.x + area.width - counts_width,
        width: counts_width,
        ..area
    };

    frame.render_widget(Paragraph::new(LEGEND).style(style), legend_area);
    frame.render_widget(Paragraph::new(counts).style(style), counts_area);
}
