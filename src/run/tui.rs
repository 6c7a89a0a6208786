use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::Config;
use crate::sheets::{RecordSource, SheetsClient};
use crate::ui::app::{App, Screen};
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(config: &Config) -> Result<()> {
    config.validate()?;
    let source = SheetsClient::new(&config.sheet_id, &config.api_key)?;

    let mut app = App::new(config.clone());
    app.load_worksheets(&source);
    app.refresh(&source);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &source);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    source: &dyn RecordSource,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(5) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            handle_input(key, app, source);
        }
    }
    Ok(())
}

fn handle_input(key: event::KeyEvent, app: &mut App, source: &dyn RecordSource) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('r') => {
            app.refresh(source);
        }
        KeyCode::Char('w') => {
            app.next_worksheet(source);
        }
        KeyCode::Char('e') => app.export(),
        KeyCode::Char('1') => switch_screen(app, Screen::Dashboard),
        KeyCode::Char('2') => switch_screen(app, Screen::Breakdown),
        KeyCode::Char('3') => switch_screen(app, Screen::Transactions),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            switch_screen(app, screens[next]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, screens[prev]);
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app, 1),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app, 1),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            handle_move_down(app, app.visible_rows / 2);
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            handle_move_up(app, app.visible_rows / 2);
        }
        KeyCode::Char('g') => {
            if app.screen == Screen::Transactions {
                scroll_to_top(&mut app.transaction_index, &mut app.transaction_scroll);
            }
        }
        KeyCode::Char('G') => {
            if app.screen == Screen::Transactions {
                let len = app.transaction_count();
                let page = app.visible_rows.max(1);
                scroll_to_bottom(
                    &mut app.transaction_index,
                    &mut app.transaction_scroll,
                    len,
                    page,
                );
            }
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
        }
        _ => {}
    }
}

fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    app.set_status(format!("{screen}"));
}

fn handle_move_down(app: &mut App, steps: usize) {
    if app.screen != Screen::Transactions {
        return;
    }
    let len = app.transaction_count();
    let page = app.visible_rows.max(1);
    for _ in 0..steps.max(1) {
        scroll_down(
            &mut app.transaction_index,
            &mut app.transaction_scroll,
            len,
            page,
        );
    }
}

fn handle_move_up(app: &mut App, steps: usize) {
    if app.screen != Screen::Transactions {
        return;
    }
    for _ in 0..steps.max(1) {
        scroll_up(&mut app.transaction_index, &mut app.transaction_scroll);
    }
}
