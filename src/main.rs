mod app;
mod input;
mod trajectory;
mod types;
mod ui;

use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(33); // ~30 fps

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();

    loop {
        // Render
        terminal.draw(|f| ui::draw(f, &app))?;

        // Block for the next event with a timeout to keep the tick rate,
        // then drain everything pending before the next draw.
        if event::poll(TICK_RATE)? {
            loop {
                if let Event::Key(key) = event::read()? {
                    // Only handle key press events, ignore release/repeat
                    if key.kind == KeyEventKind::Press {
                        // Ctrl+C always quits
                        if key.modifiers.contains(KeyModifiers::CONTROL)
                            && key.code == KeyCode::Char('c')
                        {
                            app.quit();
                        }

                        input::handle_key(&mut app, key);
                    }
                }
                if !event::poll(Duration::from_secs(0))? {
                    break;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
