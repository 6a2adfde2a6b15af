use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::collision::DeathReason;

/// Draws the game-over screen as a centered popup over the board.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    best_score: u32,
    death_reason: Option<DeathReason>,
) {
    let popup = centered_popup(area, 90, 70);
    frame.render_widget(Clear, popup);

    let lines = game_over_lines(score, best_score, death_reason);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn game_over_lines(
    score: u32,
    best_score: u32,
    death_reason: Option<DeathReason>,
) -> Vec<Line<'static>> {
    vec![
        Line::from("GAME OVER").style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("Score: {score}")),
        Line::from(format!("Best: {best_score}")),
        Line::from(death_reason.map_or(String::new(), |reason| {
            format!("Cause: {}", reason.describe())
        })),
        Line::from("[R]/[Enter] Restart"),
        Line::from("[Q]/[Esc] Quit"),
    ]
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
