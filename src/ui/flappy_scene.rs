//! Flappy Bird scene rendering.
//!
//! Uses a cell buffer for per-character color control. The world (pixels)
//! is sampled at each cell center: sky, pipes, ground stripes, then the bird
//! on top. Rows are stamped as Paragraph widgets.

use super::common::{
    render_center_banner, render_info_panel_frame, render_status_bar, screen_layout,
};
use flapper::core::session::GamePhase;
use flapper::core::snapshot::Snapshot;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PIPE_CHAR: char = '█';
const PIPE_CAP_CHAR: char = '▓';
const GROUND_CHAR: char = '▓';
const GROUND_ALT_CHAR: char = '▒';
const GRASS_CHAR: char = '▀';
/// Width of one ground stripe in world pixels.
const GROUND_STRIPE: f64 = 25.0;

const SKY: Color = Color::Rgb(40, 90, 140);
const PIPE_GREEN: Color = Color::Rgb(70, 170, 60);
const PIPE_CAP: Color = Color::Rgb(110, 210, 90);
const GRASS: Color = Color::Rgb(90, 190, 70);
const GROUND: Color = Color::Rgb(200, 170, 100);
const GROUND_DARK: Color = Color::Rgb(170, 140, 80);
const BIRD: Color = Color::Yellow;

const CONTROLS: &[(&str, &str)] = &[("[Space/Click]", "Flap"), ("[Esc/Q]", "Quit")];

/// Render the whole game screen for one frame.
pub fn render_flappy(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let layout = screen_layout(frame, area);

    render_play_field(frame, layout.play_field, snap);

    match snap.phase {
        GamePhase::NotStarted => render_start_banner(frame, layout.play_field, snap),
        GamePhase::Running => {}
        GamePhase::GameOver => render_game_over_banner(frame, layout.play_field, snap),
    }

    render_status_bar_content(frame, layout.status_bar, snap);
    render_info_panel(frame, layout.info_panel, snap);
}

/// Cell in the render buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Cell {
    fn sky() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: SKY,
        }
    }
}

/// Bird glyph from its tilt (positive = nose up).
fn bird_glyph(angle: f64) -> char {
    if angle > 10.0 {
        '▲'
    } else if angle < -10.0 {
        '▼'
    } else {
        '►'
    }
}

/// Flight time as `m:ss.s`.
fn format_flight_time(secs: f64) -> String {
    let tenths = (secs * 10.0) as u64;
    format!("{}:{:02}.{}", tenths / 600, (tenths / 10) % 60, tenths % 10)
}

/// Sample the world into a `width` x `height` grid.
fn build_buffer(snap: &Snapshot, width: usize, height: usize) -> Vec<Vec<Cell>> {
    let mut buffer = vec![vec![Cell::sky(); width]; height];
    if width == 0 || height == 0 || snap.screen_width <= 0.0 || snap.screen_height <= 0.0 {
        return buffer;
    }

    let px_per_col = snap.screen_width / width as f64;
    let px_per_row = snap.screen_height / height as f64;
    let world_x = |col: usize| (col as f64 + 0.5) * px_per_col;
    let world_y = |row: usize| (row as f64 + 0.5) * px_per_row;

    for (row, cells) in buffer.iter_mut().enumerate() {
        let wy = world_y(row);
        let row_top = row as f64 * px_per_row;

        if wy >= snap.floor_y {
            // Ground: first row is grass, then stripes scrolling with the pipes.
            let grass = row_top <= snap.floor_y;
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = if grass {
                    Cell {
                        ch: GRASS_CHAR,
                        fg: GRASS,
                        bg: GROUND,
                    }
                } else {
                    let u = (world_x(col) - snap.ground_offset).rem_euclid(snap.screen_width);
                    let dark = (u / GROUND_STRIPE) as u64 % 2 == 0;
                    Cell {
                        ch: if dark { GROUND_CHAR } else { GROUND_ALT_CHAR },
                        fg: GROUND_DARK,
                        bg: GROUND,
                    }
                };
            }
            continue;
        }

        for (col, cell) in cells.iter_mut().enumerate() {
            let wx = world_x(col);
            for pipe in &snap.pipes {
                if wx < pipe.x || wx >= pipe.x + pipe.width {
                    continue;
                }
                if wy < pipe.gap_top || wy >= pipe.gap_bottom {
                    // Lip on the segment row nearest the gap.
                    let cap = (pipe.gap_top - wy).abs() <= px_per_row
                        || (wy - pipe.gap_bottom).abs() <= px_per_row;
                    *cell = if cap {
                        Cell {
                            ch: PIPE_CAP_CHAR,
                            fg: PIPE_CAP,
                            bg: SKY,
                        }
                    } else {
                        Cell {
                            ch: PIPE_CHAR,
                            fg: PIPE_GREEN,
                            bg: SKY,
                        }
                    };
                }
                break;
            }
        }
    }

    // Bird on top of everything.
    let col = (snap.bird_x / px_per_col) as i64;
    let row = (snap.bird_y / px_per_row) as i64;
    if (0..width as i64).contains(&col) && (0..height as i64).contains(&row) {
        buffer[row as usize][col as usize] = Cell {
            ch: bird_glyph(snap.bird_angle),
            fg: BIRD,
            bg: SKY,
        };
    }

    buffer
}

/// Render the play field from the snapshot.
fn render_play_field(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    if area.height < 2 || area.width < 4 {
        return;
    }

    let buffer = build_buffer(snap, area.width as usize, area.height as usize);

    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }

    // Running score, top center.
    if snap.phase == GamePhase::Running {
        let score = Paragraph::new(Span::styled(
            format!(" {} ", snap.score),
            Style::default()
                .fg(Color::White)
                .bg(SKY)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(score, Rect::new(area.x, area.y, area.width, 1));
    }
}

fn render_start_banner(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let best = format!("Highest Score: {}", snap.high_score);
    render_center_banner(
        frame,
        area,
        Color::Yellow,
        "Flappy Bird",
        &[
            (best.as_str(), Color::White),
            ("", Color::Reset),
            ("Press SPACE or Click to Start", Color::DarkGray),
        ],
    );
}

fn render_game_over_banner(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let score = format!("Score: {}", snap.score);
    let best = format!("Highest Score: {}", snap.high_score);
    render_center_banner(
        frame,
        area,
        Color::Red,
        "GAME OVER",
        &[
            (score.as_str(), Color::White),
            (best.as_str(), Color::Cyan),
            ("", Color::Reset),
            ("Press SPACE or Click to Restart", Color::DarkGray),
        ],
    );
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    match snap.phase {
        GamePhase::NotStarted => {
            render_status_bar(frame, area, "Ready", Color::Yellow, CONTROLS);
        }
        GamePhase::Running => {
            render_status_bar(
                frame,
                area,
                &format!("Score: {}", snap.score),
                Color::Green,
                CONTROLS,
            );
        }
        GamePhase::GameOver => {
            render_status_bar(
                frame,
                area,
                &format!("Crashed! Score: {}", snap.score),
                Color::Red,
                &[("[Space/Click]", "Restart"), ("[Esc/Q]", "Quit")],
            );
        }
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snap: &Snapshot) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let state = match snap.phase {
        GamePhase::NotStarted => ("Ready", Color::Yellow),
        GamePhase::Running => ("Flying", Color::Green),
        GamePhase::GameOver => ("Crashed", Color::Red),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                snap.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(snap.high_score.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" State: ", Style::default().fg(Color::DarkGray)),
            Span::styled(state.0, Style::default().fg(state.1)),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", Style::default().fg(Color::DarkGray)),
            Span::styled(snap.pipes.len().to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled(" Time: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_flight_time(snap.elapsed_secs),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" ► ", Style::default().fg(BIRD)),
            Span::styled("Bird", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" █ ", Style::default().fg(PIPE_GREEN)),
            Span::styled("Pipe", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use flapper::core::config::GameConfig;
    use flapper::core::pipe::Pipe;
    use flapper::core::session::GameSession;

    /// 50 x 65 grid: one cell is 10 x 10 world pixels.
    fn sample(session: &GameSession) -> Vec<Vec<Cell>> {
        build_buffer(&Snapshot::of(session), 50, 65)
    }

    #[test]
    fn test_bird_glyph_follows_tilt() {
        assert_eq!(bird_glyph(25.5), '▲');
        assert_eq!(bird_glyph(0.0), '►');
        assert_eq!(bird_glyph(-25.0), '▼');
    }

    #[test]
    fn test_format_flight_time() {
        assert_eq!(format_flight_time(0.0), "0:00.0");
        assert_eq!(format_flight_time(1.5), "0:01.5");
        assert_eq!(format_flight_time(75.25), "1:15.2");
    }

    #[test]
    fn test_bird_drawn_at_position() {
        let session = GameSession::new(GameConfig::default(), 0);
        let buffer = sample(&session);
        // Bird at (80, 325) -> column 8, row 32.
        assert_eq!(buffer[32][8].ch, '►');
        assert_eq!(buffer[32][8].fg, BIRD);
    }

    #[test]
    fn test_ground_below_floor() {
        let session = GameSession::new(GameConfig::default(), 0);
        let buffer = sample(&session);
        // Floor at y=550 -> rows 55.. are ground, row 55 is grass.
        assert_eq!(buffer[54][0], Cell::sky());
        assert_eq!(buffer[55][0].ch, GRASS_CHAR);
        assert!(matches!(buffer[60][0].ch, GROUND_CHAR | GROUND_ALT_CHAR));
    }

    #[test]
    fn test_ground_stripes_scroll() {
        let mut session = GameSession::new(GameConfig::default(), 0);
        let before: Vec<char> = sample(&session)[60].iter().map(|c| c.ch).collect();
        session.ground_offset = 25.0;
        let after: Vec<char> = sample(&session)[60].iter().map(|c| c.ch).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_pipe_leaves_gap_open() {
        let config = GameConfig::default();
        let mut session = GameSession::new(config.clone(), 0);
        // Columns 30..37, gap 125..275.
        session.pipes.push(Pipe::new(300.0, 200.0, &config));
        let buffer = sample(&session);

        assert_eq!(buffer[2][32].ch, PIPE_CHAR);
        assert_eq!(buffer[20][32], Cell::sky());
        assert_eq!(buffer[40][32].ch, PIPE_CHAR);
        assert_eq!(buffer[40][29], Cell::sky());
    }

    #[test]
    fn test_empty_grid_is_safe() {
        let session = GameSession::new(GameConfig::default(), 0);
        assert!(build_buffer(&Snapshot::of(&session), 0, 0).is_empty());
    }
}
