//! Results panel.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use bodycomp_core::display::{DisplayFields, DisplayStatus};

use crate::styles::ColorTheme;

/// Render the eight result lines.
pub fn render_results(frame: &mut Frame, area: Rect, display: &DisplayFields, theme: &ColorTheme) {
    let value_style = match display.status {
        DisplayStatus::Empty => theme.muted_style(),
        DisplayStatus::Computed => theme.value_style(),
        DisplayStatus::Invalid => theme.error_style(),
    };

    let lines: Vec<Line> = display
        .iter()
        .map(|field| {
            Line::from(vec![
                Span::styled(format!("{}: ", field.label), theme.text_style()),
                Span::styled(field.value.as_str(), value_style),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(" Results ", theme.header_style()))
        .title_alignment(Alignment::Center);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
