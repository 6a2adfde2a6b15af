pub mod board;
pub mod hud;
pub mod menu;

use ratatui::Frame;

use crate::renderer::render_frame;
use crate::session::Session;
use hud::{HudInfo, render_hud};

/// Renders the full terminal frame from immutable session state.
pub fn draw(frame: &mut Frame<'_>, session: &Session) {
    let state = session.state();
    let info = HudInfo {
        score: state.score(),
        best_score: session.best_score(),
        length: state.snake().len(),
        mode: session.mode(),
        heading: state.heading(),
        tick_count: state.tick_count(),
    };

    let area = frame.area();
    let play_area = render_hud(frame, area, &info);
    let pixels = render_frame(state);
    let board_area = board::render_board(frame, play_area, &pixels);

    if state.is_terminal() {
        menu::render_game_over_menu(
            frame,
            board_area,
            state.score(),
            session.best_score(),
            state.death_reason(),
        );
    }
}
