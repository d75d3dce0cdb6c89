//! Toast overlay rendering for the notification queue.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::notify::{ActiveToast, Severity};
use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR, STATUS_OK};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;
const MARGIN: u16 = 1;

/// Stacks toasts from the top-right corner of `area`, newest on top.
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[ActiveToast]) {
    for (index, toast) in toasts.iter().enumerate() {
        let Some(slot) = toast_slot(area, index) else {
            break;
        };
        render_toast(frame, slot, toast);
    }
}

fn render_toast(frame: &mut Frame, area: Rect, toast: &ActiveToast) {
    let color = match toast.notification.status {
        Severity::Success => STATUS_OK,
        Severity::Error => STATUS_ERROR,
    };
    let mut title = vec![Span::styled(
        format!(" {} ", toast.notification.title),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if toast.notification.closable {
        title.push(Span::styled("✕ ", Style::default().fg(HEADER_TEXT)));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(toast.notification.description.as_str())
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

/// Rect for the `index`-th toast, or `None` once the stack runs out of room.
fn toast_slot(area: Rect, index: usize) -> Option<Rect> {
    let index = u16::try_from(index).ok()?;
    let width = TOAST_WIDTH.min(area.width.saturating_sub(MARGIN * 2));
    let y = area.y + MARGIN + index.checked_mul(TOAST_HEIGHT)?;
    if width == 0 || y + TOAST_HEIGHT > area.y + area.height {
        return None;
    }
    Some(Rect {
        x: area.x + area.width - width - MARGIN,
        y,
        width,
        height: TOAST_HEIGHT,
    })
}
