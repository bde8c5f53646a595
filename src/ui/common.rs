//! Screen frame shared by every phase: bordered window, play field, a
//! two-line status bar, and the info panel on the right.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TITLE: &str = " Flappy Bird ";
const BORDER: Color = Color::Cyan;
const PLAY_MIN_HEIGHT: u16 = 10;
const INFO_WIDTH: u16 = 22;

/// Areas of the game screen.
pub struct ScreenLayout {
    pub play_field: Rect,
    pub status_bar: Rect,
    pub info_panel: Rect,
}

/// Clear `area`, draw the window border and split the inside:
///
/// ```text
/// ┌─ Flappy Bird ───────────────────┬─ Info ──────┐
/// │ [play field]                    │ [info]      │
/// │ [status: 2 lines]               │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn screen_layout(frame: &mut Frame, area: Rect) -> ScreenLayout {
    frame.render_widget(Clear, area);

    let window = Block::default()
        .title(TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER));
    let inner = window.inner(area);
    frame.render_widget(window, area);

    let [left, info_panel] =
        split(Layout::horizontal([Constraint::Min(20), Constraint::Length(INFO_WIDTH)]), inner);
    let [play_field, status_bar] = split(
        Layout::vertical([Constraint::Min(PLAY_MIN_HEIGHT), Constraint::Length(2)]),
        left,
    );

    ScreenLayout {
        play_field,
        status_bar,
        info_panel,
    }
}

fn split(layout: Layout, area: Rect) -> [Rect; 2] {
    let chunks = layout.split(area);
    [chunks[0], chunks[1]]
}

/// Status line on top, key hints below. `keys` pairs a key label with its
/// action, e.g. `("[Esc/Q]", "Quit")`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status: &str,
    color: Color,
    keys: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }
    let status = Paragraph::new(Span::styled(status.to_string(), Style::default().fg(color)))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height < 2 || keys.is_empty() {
        return;
    }
    let hints: Vec<Span> = keys
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            [
                Span::raw(if i == 0 { "" } else { "  " }),
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {}", action), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(hints)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Border of the info panel. Returns the area inside it.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Bordered message box centered in `area`. Only the box is cleared, so the
/// play field stays visible around it. An empty body line is a spacer.
pub fn render_center_banner(
    frame: &mut Frame,
    area: Rect,
    color: Color,
    title: &str,
    body: &[(&str, Color)],
) {
    let widest = body
        .iter()
        .map(|(text, _)| text.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0) as u16;

    let width = (widest + 6).min(area.width);
    let height = (body.len() as u16 + 4).min(area.height);
    if width < 4 || height < 3 {
        return;
    }
    let banner = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, banner);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(banner);
    frame.render_widget(block, banner);

    let mut lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        body.iter()
            .map(|(text, fg)| Line::from(Span::styled(text.to_string(), Style::default().fg(*fg)))),
    );

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer.get(x, y).symbol().to_string())
            .collect()
    }

    #[test]
    fn test_layout_reserves_status_and_info() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut areas = None;
        terminal
            .draw(|f| {
                let area = f.size();
                areas = Some(screen_layout(f, area));
            })
            .unwrap();
        let layout = areas.unwrap();

        assert_eq!(layout.info_panel.width, INFO_WIDTH);
        assert_eq!(layout.status_bar.height, 2);
        assert_eq!(layout.play_field.height, 24 - 2 - 2);
        assert_eq!(layout.play_field.width, 80 - 2 - INFO_WIDTH);
        assert!(row_text(&terminal, 0).contains("Flappy Bird"));
    }

    #[test]
    fn test_banner_centered_and_titled() {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                render_center_banner(
                    f,
                    area,
                    Color::Red,
                    "GAME OVER",
                    &[("Score: 3", Color::White)],
                )
            })
            .unwrap();
        // 5 lines tall, rows 3..8; title on the first inner row.
        assert!(row_text(&terminal, 4).contains("GAME OVER"));
        assert!(row_text(&terminal, 6).contains("Score: 3"));
    }

    #[test]
    fn test_banner_skipped_when_too_small() {
        let mut terminal = Terminal::new(TestBackend::new(3, 2)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                render_center_banner(f, area, Color::Red, "GAME OVER", &[]);
            })
            .unwrap();
        assert_eq!(row_text(&terminal, 0).trim(), "");
    }
}
