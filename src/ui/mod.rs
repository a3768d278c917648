pub mod plot;
pub mod status_panel;
pub mod theme;

use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Master render function: trajectory canvas, status overlay, footer.
pub fn draw(f: &mut Frame, app: &App) {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // plot
            Constraint::Length(1), // footer
        ])
        .split(f.area());

    // Layer 0: the trajectory plot fills the body
    plot::draw_plot(f, vert[0], app);

    // Layer 1: status panel overlaid on the plot, top-right
    status_panel::draw_status_panel(f, vert[0], app);

    draw_footer(f, vert[1]);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Line::from(vec![
        Span::styled(" [↑↓]", theme::key_hint_style()),
        Span::styled(" Angle  ", theme::footer_style()),
        Span::styled("[←→]", theme::key_hint_style()),
        Span::styled(" Velocity  ", theme::footer_style()),
        Span::styled("[Esc]", theme::key_hint_style()),
        Span::styled(" Quit", theme::footer_style()),
    ]);

    f.render_widget(
        Paragraph::new(footer).style(theme::footer_style()),
        area,
    );
}
