//! Screen layout and the small widgets the game screen is built from.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the info column, border included.
pub const INFO_WIDTH: u16 = 24;
/// Message line plus key hints.
const STATUS_HEIGHT: u16 = 2;

/// Screen areas for one frame.
///
/// ```text
/// ┌─ Flappy · Level 2 ────────────────┬─ Info ───┐
/// │ [playfield]                       │ [info]   │
/// │                                   │          │
/// │         [message]  [key hints]    │          │
/// └───────────────────────────────────┴──────────┘
/// ```
pub struct ScreenLayout {
    pub playfield: Rect,
    pub status: Rect,
    pub info: Rect,
}

/// Clear `area`, draw the titled outer border and split what is inside it.
pub fn split_screen(
    frame: &mut Frame,
    area: Rect,
    title: Line<'static>,
    accent: Color,
) -> ScreenLayout {
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    split_inner(inner)
}

/// Info column on the right, status strip under the playfield.
fn split_inner(inner: Rect) -> ScreenLayout {
    let info_width = INFO_WIDTH.min(inner.width);
    let left = Rect {
        width: inner.width - info_width,
        ..inner
    };
    let info = Rect {
        x: left.right(),
        width: info_width,
        ..inner
    };

    let status_height = STATUS_HEIGHT.min(left.height);
    let playfield = Rect {
        height: left.height - status_height,
        ..left
    };
    let status = Rect {
        y: playfield.bottom(),
        height: status_height,
        ..left
    };

    ScreenLayout {
        playfield,
        status,
        info,
    }
}

/// Two centred lines: a coloured message, then `[key] action` hints.
pub fn status_lines(
    message: String,
    color: Color,
    hints: &[(&str, &str)],
) -> Paragraph<'static> {
    let key_style = Style::default().fg(Color::White);
    let action_style = Style::default().fg(Color::DarkGray);

    let hint_spans: Vec<Span<'static>> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let sep = if i == 0 { "" } else { "  " };
            [
                Span::raw(sep),
                Span::styled(key.to_string(), key_style),
                Span::styled(format!(" {}", action), action_style),
            ]
        })
        .collect();

    Paragraph::new(vec![
        Line::styled(message, Style::default().fg(color)),
        Line::from(hint_spans),
    ])
    .alignment(Alignment::Center)
}

/// Info panel frame with a " Info " title. Returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A centred modal box with a bold title and body lines.
pub fn render_modal(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    title_color: Color,
    body: Vec<Line<'static>>,
) {
    let width = 34u16.min(area.width);
    let height = (body.len() as u16 + 4).min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let modal = Rect::new(x, y, width, height);

    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let mut lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(body);

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Render a label/value row for the info panel.
pub fn info_row(label: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(
            value,
            Style::default()
                .fg(value_color)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_inner_places_info_right_and_status_below() {
        let layout = split_inner(Rect::new(1, 1, 78, 22));

        assert_eq!(layout.info, Rect::new(55, 1, INFO_WIDTH, 22));
        assert_eq!(layout.playfield, Rect::new(1, 1, 54, 20));
        assert_eq!(layout.status, Rect::new(1, 21, 54, STATUS_HEIGHT));
    }

    #[test]
    fn test_split_inner_never_overflows_tiny_areas() {
        let layout = split_inner(Rect::new(0, 0, 10, 1));

        assert_eq!(layout.info.width, 10);
        assert_eq!(layout.playfield.width, 0);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.playfield.height, 0);
    }
}
