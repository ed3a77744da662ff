//! Input groups: personal information, skinfold grid, and the calculate button.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use bodycomp_core::inputs::{InputField, SkinfoldSite};

use crate::form::{field_label, field_placeholder, FormSlot, FormState};
use crate::styles::ColorTheme;

/// Width reserved for personal field labels ("Height: ").
const LABEL_WIDTH: usize = 8;

/// Skinfold sites per grid row.
const SKINFOLD_COLUMNS: usize = 2;

fn group_block(title: &str, theme: &ColorTheme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(format!(" {title} "), theme.header_style()))
        .title_alignment(Alignment::Center)
}

/// Field text, or its placeholder while empty. Focused fields show a cursor.
fn field_span<'a>(form: &'a FormState, field: InputField, theme: &ColorTheme) -> Span<'a> {
    let focused = form.is_focused(field);
    let value = form.value(field);
    if value.is_empty() && !focused {
        Span::styled(
            field_placeholder(field),
            theme.muted_style().bg(theme.field_bg),
        )
    } else if focused {
        Span::styled(format!("{value}_"), theme.field_style(true))
    } else {
        Span::styled(value, theme.field_style(false))
    }
}

/// Render the personal information group.
pub fn render_personal(frame: &mut Frame, area: Rect, form: &FormState, theme: &ColorTheme) {
    let lines: Vec<Line> = [
        InputField::Name,
        InputField::Age,
        InputField::Height,
        InputField::Weight,
    ]
    .into_iter()
    .map(|field| {
        let label = format!(
            "{:<width$}",
            format!("{}:", field_label(field)),
            width = LABEL_WIDTH
        );
        Line::from(vec![
            Span::styled(label, theme.text_style()),
            field_span(form, field, theme),
        ])
    })
    .collect();

    let paragraph = Paragraph::new(lines).block(group_block("Personal Information", theme));
    frame.render_widget(paragraph, area);
}

/// Render the skinfold grid, two sites per row.
pub fn render_skinfolds(frame: &mut Frame, area: Rect, form: &FormState, theme: &ColorTheme) {
    let block = group_block("Skinfold Measurements (mm)", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (col, column_area) in columns.iter().enumerate() {
        let lines: Vec<Line> = SkinfoldSite::ALL
            .iter()
            .skip(col)
            .step_by(SKINFOLD_COLUMNS)
            .map(|&site| Line::from(field_span(form, InputField::Skinfold(site), theme)))
            .collect();
        frame.render_widget(Paragraph::new(lines), *column_area);
    }
}

/// Render the calculate button.
pub fn render_button(frame: &mut Frame, area: Rect, form: &FormState, theme: &ColorTheme) {
    let focused = form.focused() == FormSlot::CalculateButton;
    let paragraph = Paragraph::new("Calculate")
        .style(theme.button_style(focused))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(theme.border_style()));
    frame.render_widget(paragraph, area);
}
