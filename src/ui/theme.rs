use ratatui::style::{Color, Modifier, Style};

// ── Base palette (gruvbox-ish) ──────────────────────────────────
pub const BG: Color = Color::Rgb(29, 32, 33);
pub const CURVE: Color = Color::Rgb(250, 189, 47);
pub const PANEL: Color = Color::Rgb(50, 48, 47);
pub const TEXT: Color = Color::Rgb(235, 219, 178);
pub const TEXT_DIM: Color = Color::Rgb(146, 131, 116);

// ── Composite styles ────────────────────────────────────────────
pub fn label_style() -> Style {
    Style::default().fg(TEXT).bg(PANEL)
}

pub fn limit_style() -> Style {
    label_style().add_modifier(Modifier::BOLD)
}

pub fn key_hint_style() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(BG)
        .add_modifier(Modifier::BOLD)
}

pub fn footer_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(BG)
}
