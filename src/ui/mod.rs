pub mod game_common;
pub mod game_scene;

use flappy::game::Game;
use flappy::hud::Hud;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Smallest terminal the game screen fits in.
pub const MIN_WIDTH: u16 = 50;
pub const MIN_HEIGHT: u16 = 16;

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, game: &Game, hud: &Hud) {
    let size = frame.size();

    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small ({}x{}), need {}x{}",
            size.width, size.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, size);
        return;
    }

    game_scene::render_game(frame, size, game, hud);
}
