use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::{HUD_SEPARATOR, PLAY_AREA_MARGIN_X};
use crate::input::{ControlMode, Direction};

const KEY_HINT: &str = "arrows/WASD move · m mode · r restart · q quit";

/// Values displayed by the HUD row.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub score: u32,
    pub best_score: u32,
    pub length: usize,
    pub mode: ControlMode,
    pub heading: Direction,
    pub tick_count: u64,
}

/// Renders the status row and key hint, returning the play area above them.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, info: &HudInfo) -> Rect {
    let [play_area, status_area, hint_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let status_area = inset_horizontal(status_area, PLAY_AREA_MARGIN_X);
    let hint_area = inset_horizontal(hint_area, PLAY_AREA_MARGIN_X);

    frame.render_widget(
        Paragraph::new(status_line(info, usize::from(status_area.width)))
            .alignment(Alignment::Center),
        status_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(KEY_HINT))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        hint_area,
    );

    play_area
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}

/// Label/value pairs in display order.
fn fields(info: &HudInfo, compact: bool) -> [(&'static str, String); 5] {
    let label = |full: &'static str, short: &'static str| if compact { short } else { full };

    [
        (label("Score", "S"), info.score.to_string()),
        (label("Best", "B"), info.best_score.to_string()),
        (label("Length", "L"), info.length.to_string()),
        (
            label("Mode", "M"),
            format!("{} {}", info.mode.label(), info.heading.arrow()),
        ),
        (label("Tick", "T"), info.tick_count.to_string()),
    ]
}

fn line_width(fields: &[(&'static str, String)]) -> usize {
    let separators = fields.len().saturating_sub(1) * (HUD_SEPARATOR.width() + 2);
    let content: usize = fields
        .iter()
        .map(|(label, value)| label.width() + 2 + value.width())
        .sum();
    separators + content
}

fn status_line(info: &HudInfo, available_width: usize) -> Line<'static> {
    let full = fields(info, false);
    let chosen = if line_width(&full) > available_width {
        fields(info, true)
    } else {
        full
    };

    let value_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(chosen.len() * 3);
    for (index, (label, value)) in chosen.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(
                format!(" {HUD_SEPARATOR} "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::raw(format!("{label}: ")));
        spans.push(Span::styled(value, value_style));
    }

    Line::from(spans)
}
