//! Rendering of the profile form. Pure function of [`FormState`].

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::profile::{phone, InputKind, ProfileField};
use crate::ui::theme::{
    ACCENT, FIELD_BORDER, HEADER_TEXT, PLACEHOLDER_TEXT, STATUS_ERROR, STATUS_OK,
};

use super::state::{FormState, SubmitPhase};

/// Rows used by one field: bordered input (3) + error line (1).
const FIELD_HEIGHT: u16 = 4;

/// Maximum width of the form column.
const FORM_WIDTH: u16 = 64;

const DATE_PLACEHOLDER: &str = "AAAA-MM-JJ";

pub fn render_form(frame: &mut Frame, area: Rect, state: &FormState) {
    let column = centered_column(area, FORM_WIDTH);

    let mut constraints: Vec<Constraint> = ProfileField::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(column);

    for (field, row) in ProfileField::ALL.iter().zip(rows.iter()) {
        render_field(frame, *row, state, *field);
    }

    if let Some(row) = rows.get(ProfileField::ALL.len()) {
        frame.render_widget(Paragraph::new(status_line(&state.phase)), *row);
    }
}

fn render_field(frame: &mut Frame, area: Rect, state: &FormState, field: ProfileField) {
    let focused = state.focused == field;
    let error = state.error(field);

    let border_color = if error.is_some() {
        STATUS_ERROR
    } else if focused {
        ACCENT
    } else {
        FIELD_BORDER
    };
    let title_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", field.label()), title_style))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };
    let inner = block.inner(input_area);
    let (spans, cursor_offset) = input_spans(state, field);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);

    if focused && inner.width > 0 && inner.height > 0 {
        let x = inner.x + cursor_offset.min(inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }

    if let Some(message) = error {
        if area.height > 3 {
            let error_area = Rect {
                x: area.x + 1,
                y: area.y + 3,
                width: area.width.saturating_sub(1),
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Span::styled(message, Style::default().fg(STATUS_ERROR))),
                error_area,
            );
        }
    }
}

/// Spans for the input content and the cursor column relative to the
/// inner area.
fn input_spans(state: &FormState, field: ProfileField) -> (Vec<Span<'static>>, u16) {
    let value = state.value(field);
    let text_style = Style::default().fg(HEADER_TEXT);

    match field.input_kind() {
        InputKind::Phone => {
            let country = state.country();
            let selector = format!("[{} +{}] ", country.code.to_uppercase(), country.dial_code);
            let digits = phone::national_digits(value).to_string();
            let offset = width_of(&selector) + width_of(&digits);
            (
                vec![
                    Span::styled(selector, Style::default().fg(ACCENT)),
                    Span::styled(digits, text_style),
                ],
                offset,
            )
        }
        InputKind::Date if value.is_empty() => (
            vec![Span::styled(
                DATE_PLACEHOLDER,
                Style::default().fg(PLACEHOLDER_TEXT),
            )],
            0,
        ),
        InputKind::Text | InputKind::Email | InputKind::Date => {
            (vec![Span::styled(value.to_string(), text_style)], width_of(value))
        }
    }
}

fn status_line(phase: &SubmitPhase) -> Line<'static> {
    match phase {
        SubmitPhase::Idle => Line::from(""),
        SubmitPhase::Invalid => Line::from(Span::styled(
            " Veuillez corriger les champs en erreur.",
            Style::default().fg(STATUS_ERROR),
        )),
        SubmitPhase::Submitting => Line::from(Span::styled(
            " Envoi en cours...",
            Style::default().fg(PLACEHOLDER_TEXT),
        )),
        SubmitPhase::Submitted => Line::from(Span::styled(
            " Inscription enregistrée.",
            Style::default().fg(STATUS_OK),
        )),
        SubmitPhase::Failed { message } => Line::from(Span::styled(
            format!(" Échec de l'envoi : {}", message),
            Style::default().fg(STATUS_ERROR),
        )),
    }
}

fn width_of(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
