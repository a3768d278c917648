use super::theme;
use crate::app::App;
use crate::types::Projectile;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

const PANEL_WIDTH: u16 = 26;
const PANEL_HEIGHT: u16 = 3;

/// Draws the parameter overlay anchored top-right, like the original's
/// translucent rectangle.
pub fn draw_status_panel(f: &mut Frame, area: Rect, app: &App) {
    let width = PANEL_WIDTH.min(area.width);
    let height = PANEL_HEIGHT.min(area.height);
    let panel = Rect {
        x: area.right().saturating_sub(width),
        y: area.y,
        width,
        height,
    };

    let lines: Vec<Line> = panel_labels(&app.projectile)
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let style = if i < 2 {
                theme::label_style()
            } else {
                theme::limit_style()
            };
            Line::from(Span::styled(format!(" {}", text), style))
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().style(theme::label_style()));
    f.render_widget(paragraph, panel);
}

/// The label set for the current parameters: the two readouts, plus the
/// limit label when the angle sits at either end of its range.
pub fn panel_labels(projectile: &Projectile) -> Vec<String> {
    let mut labels = vec![
        format!("Angle: {:.0}", projectile.angle),
        format!("Initial Velocity: {:.0}", projectile.speed),
    ];
    if let Some(limit) = projectile.limit_label() {
        labels.push(limit.to_string());
    }
    labels
}
