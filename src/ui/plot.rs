use super::theme;
use crate::app::App;
use crate::trajectory;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::Frame;

// Logical plot space, matching the original 640x480 window. The canvas
// y axis grows upward, so launch height increases toward the top of the
// screen without a manual flip.
pub const PLOT_WIDTH: f64 = 640.0;
pub const PLOT_HEIGHT: f64 = 480.0;
const SAMPLE_STEP: f64 = 0.5;

pub fn draw_plot(f: &mut Frame, area: Rect, app: &App) {
    let points = if app.projectile.curve_visible() {
        trajectory::sample_curve(&app.projectile, PLOT_WIDTH, SAMPLE_STEP)
    } else {
        Vec::new()
    };

    let canvas = Canvas::default()
        .background_color(theme::BG)
        .marker(Marker::Braille)
        .x_bounds([0.0, PLOT_WIDTH])
        .y_bounds([0.0, PLOT_HEIGHT])
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &points,
                color: theme::CURVE,
            });
        });

    f.render_widget(canvas, area);
}
