//! Terminal reproduction of a windowed-table rendering defect.
//!
//! A fixed synthetic dataset is rendered through two engines driven in sync: `tablecore`
//! builds the header and cell grid, `rowwindow` decides which rows are on screen and where.
//! Rendering used to go wrong for datasets with fewer than two rows; the engines now agree
//! for every count, and the tests across this crate pin that.

mod app;
mod columns;
mod data;
mod ui;

use std::io::{self, Stdout};

use anyhow::{Context, Result, bail};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::tty::IsTty;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app::ReproApp;

fn main() -> Result<()> {
    let mut stdout = io::stdout();
    if !stdout.is_tty() {
        bail!("stdout is not a terminal; run this from an interactive shell");
    }

    let mut app = ReproApp::new();

    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    // Keep the loop's result separate so the terminal is restored on the error path too.
    let result = run(&mut terminal, &mut app);
    let restored = restore_terminal(&mut terminal);
    result.and(restored)
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut ReproApp) -> Result<()> {
    let size = terminal.size().context("query terminal size")?;
    app.resize(size.height);

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;
        match event::read().context("read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if handle_key(key, app) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => app.scroll_by(-1),
                MouseEventKind::ScrollDown => app.scroll_by(1),
                _ => {}
            },
            Event::Resize(_, rows) => app.resize(rows),
            _ => {}
        }
    }
}

/// Applies one key press. Returns `true` when the app should quit.
fn handle_key(key: KeyEvent, app: &mut ReproApp) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_bottom(),
        _ => {}
    }
    false
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
        .context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}
