//! Terminal rendering of the playfield, HUD and start/game-over screens.

use super::game_common::{
    info_row, render_info_panel_frame, render_modal, split_screen, status_lines,
};
use flappy::constants::{FLOOR_Y, WORLD_HEIGHT, WORLD_WIDTH};
use flappy::game::{DeathCause, Game, Phase};
use flappy::hud::{countdown_text, Hud};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SKY: Color = Color::Rgb(112, 197, 206);
const PIPE: Color = Color::Rgb(76, 175, 80);
const PIPE_CAP: Color = Color::Rgb(56, 142, 60);
const GRASS: Color = Color::Rgb(139, 195, 74);
const GROUND: Color = Color::Rgb(215, 204, 200);
const BIRD: Color = Color::Rgb(255, 235, 59);

/// Height of the grass strip on top of the ground.
const GRASS_HEIGHT: f64 = 10.0;
/// Pipe caps overhang the pipe by this much on each side.
const CAP_OVERHANG: f64 = 5.0;
const CAP_HEIGHT: f64 = 20.0;

const CONTROLS: &[(&str, &str)] = &[("[Space/Click]", "Flap"), ("[q]", "Quit")];

/// What occupies a point of the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Sky,
    Pipe,
    PipeCap,
    Grass,
    Ground,
}

/// Render the whole game screen.
pub fn render_game(frame: &mut Frame, area: Rect, game: &Game, hud: &Hud) {
    let title = Line::from(format!(" Flappy · Level {} ", hud.level));
    let layout = split_screen(frame, area, title, Color::Cyan);

    render_play_area(frame, layout.playfield, game);
    render_status(frame, layout.status, game, hud);
    render_info_panel(frame, layout.info, game, hud);

    match game.phase {
        Phase::Idle => render_start_screen(frame, layout.playfield),
        Phase::GameOver => render_game_over(frame, layout.playfield, hud),
        Phase::Running => {}
    }
}

fn classify(game: &Game, x: f64, y: f64) -> Cell {
    if y >= FLOOR_Y {
        return if y < FLOOR_Y + GRASS_HEIGHT {
            Cell::Grass
        } else {
            Cell::Ground
        };
    }

    for pipe in &game.pipes {
        let in_cap_x = x >= pipe.x - CAP_OVERHANG && x < pipe.right_edge() + CAP_OVERHANG;
        let in_top_cap = y >= pipe.top_height - CAP_HEIGHT && y < pipe.top_height;
        let in_bottom_cap = y >= pipe.bottom_y && y < pipe.bottom_y + CAP_HEIGHT;
        if in_cap_x && (in_top_cap || in_bottom_cap) {
            return Cell::PipeCap;
        }
        if x >= pipe.x && x < pipe.right_edge() && (y < pipe.top_height || y >= pipe.bottom_y) {
            return Cell::Pipe;
        }
    }

    Cell::Sky
}

/// Terminal cell holding the bird's centre.
fn bird_cell(game: &Game, width: usize, height: usize) -> (usize, usize) {
    let col = (game.bird.x / WORLD_WIDTH * width as f64).floor().max(0.0) as usize;
    let row = (game.bird.y / WORLD_HEIGHT * height as f64).floor().max(0.0) as usize;
    (col.min(width - 1), row.min(height - 1))
}

fn bird_glyph(velocity: f64) -> &'static str {
    if velocity < -2.0 {
        "▲"
    } else if velocity > 4.0 {
        "▼"
    } else {
        "►"
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, game: &Game) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let (bird_col, bird_row) = bird_cell(game, width, height);
    let mut lines = Vec::with_capacity(height);

    for row in 0..height {
        let y = (row as f64 + 0.5) / height as f64 * WORLD_HEIGHT;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            let x = (col as f64 + 0.5) / width as f64 * WORLD_WIDTH;
            let cell = classify(game, x, y);

            if row == bird_row && col == bird_col {
                let bg = match cell {
                    Cell::Sky => SKY,
                    Cell::Pipe => PIPE,
                    Cell::PipeCap => PIPE_CAP,
                    Cell::Grass => GRASS,
                    Cell::Ground => GROUND,
                };
                spans.push(Span::styled(
                    bird_glyph(game.bird.velocity),
                    Style::default()
                        .fg(BIRD)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let span = match cell {
                Cell::Sky => Span::styled(" ", Style::default().bg(SKY)),
                Cell::Pipe => Span::styled("█", Style::default().fg(PIPE).bg(SKY)),
                Cell::PipeCap => Span::styled("█", Style::default().fg(PIPE_CAP).bg(SKY)),
                Cell::Grass => Span::styled("▀", Style::default().fg(GRASS).bg(GROUND)),
                Cell::Ground => Span::styled("░", Style::default().fg(Color::Gray).bg(GROUND)),
            };
            spans.push(span);
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, area: Rect, game: &Game, hud: &Hud) {
    let status = match game.phase {
        Phase::Idle => status_lines(
            "Press Space to start!".to_string(),
            Color::Yellow,
            &[("[Space/Enter]", "Start"), ("[q]", "Quit")],
        ),
        Phase::Running if hud.show_level_up() => status_lines(
            format!("LEVEL UP! Welcome to level {}", hud.level),
            Color::Magenta,
            CONTROLS,
        ),
        Phase::Running => status_lines(
            format!("Score: {}", hud.score_text()),
            Color::Green,
            CONTROLS,
        ),
        Phase::GameOver => status_lines(
            "Game over".to_string(),
            Color::Red,
            &[("[Enter/r]", "Restart"), ("[q]", "Quit")],
        ),
    };
    frame.render_widget(status, area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &Game, hud: &Hud) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let mut lines = vec![
        info_row("Score", hud.score_text(), Color::White),
        Line::from(Span::styled(
            format!(" {}", hud.level_text()),
            Style::default().fg(Color::Cyan),
        )),
        info_row("Best", hud.best_score.to_string(), Color::Yellow),
        Line::from(""),
        info_row("Speed", format!("{:.1}", game.world.speed), Color::White),
        info_row("Gap", format!("{:.0}", game.world.pipe_gap), Color::Green),
        Line::from(""),
    ];

    if game.phase == Phase::Running {
        lines.push(Line::from(Span::styled(
            format!(" {}", countdown_text(game.world.next_spawn_in_ms())),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if hud.show_level_up() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " LEVEL UP!",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_start_screen(frame: &mut Frame, area: Rect) {
    render_modal(
        frame,
        area,
        "FLAPPY",
        Color::Yellow,
        vec![
            Line::from("Flap through the gaps."),
            Line::from("Every 10 pipes: faster, tighter."),
            Line::from(""),
            Line::from(Span::styled(
                "[Space] to start",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    );
}

fn render_game_over(frame: &mut Frame, area: Rect, hud: &Hud) {
    let Some(summary) = hud.summary else {
        return;
    };
    let cause = match summary.cause {
        DeathCause::Floor => "You hit the ground.",
        DeathCause::Pipe => "You hit a pipe.",
    };

    render_modal(
        frame,
        area,
        "GAME OVER",
        Color::Red,
        vec![
            Line::from(cause),
            Line::from(format!("Score: {}", summary.score)),
            Line::from(format!("Level: {}", summary.level)),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] to play again",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    );
}
