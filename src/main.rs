use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{error, info};

use campadmin::app::{App, InputMode};
use campadmin::config::{self, PanelVariant};
use campadmin::core::Action;
use campadmin::modules::review_dialog::DialogEvent;
use campadmin::store::FixtureStore;
use campadmin::ui;

#[derive(Debug, Parser)]
#[command(
    name = "campadmin",
    version,
    about = "The Wonderful World Of Camping Admin: a terminal store dashboard"
)]
struct Args {
    /// Config file (default: $CAMPADMIN_CONFIG or ~/.config/campadmin/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Panel shown next to the category chart
    #[arg(long, value_enum)]
    panel: Option<PanelVariant>,

    /// Event loop tick in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = config::log_path() {
        campadmin::logging::init(&path);
    }

    let mut config = match args.config.as_deref() {
        Some(path) => config::load_from(path),
        None => config::load(),
    };
    if let Some(panel) = args.panel {
        config.panel = panel;
    }
    if let Some(tick_ms) = args.tick_ms {
        config.tick_ms = tick_ms;
    }

    let fixtures = FixtureStore::builtin()?;
    info!(
        reviews = fixtures.reviews().len(),
        panel = ?config.panel,
        "starting dashboard"
    );

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(&fixtures, config);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(%err, "dashboard exited with error");
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(app.config.tick_ms.max(1));
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            info!("quit requested");
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal if app.dialog.is_open() => handle_dialog_mode(app, key),
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    let action = match (key.code, key.modifiers) {
        (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q'), _) => Action::Quit,
        (KeyCode::Char('?'), _) => Action::ToggleHelp,
        (KeyCode::Char(':') | KeyCode::Char('/'), _) => {
            app.enter_command();
            Action::None
        }
        (KeyCode::Tab | KeyCode::Char('l'), _) => {
            app.cycle_focus(true);
            Action::None
        }
        (KeyCode::BackTab | KeyCode::Char('h'), _) => {
            app.cycle_focus(false);
            Action::None
        }
        (KeyCode::Char('j') | KeyCode::Down, _) => {
            app.move_selection_down();
            Action::None
        }
        (KeyCode::Char('k') | KeyCode::Up, _) => {
            app.move_selection_up();
            Action::None
        }
        (KeyCode::Enter | KeyCode::Char('c'), _) => app.activate_selected(),
        (KeyCode::Char('v'), _) => Action::TogglePanel,
        (KeyCode::Char('e'), _) => Action::Export,
        _ => Action::None,
    };
    app.apply_action(action);
}

/// The dialog is modal: only its own keys (plus the command line) get through.
fn handle_dialog_mode(app: &mut App, key: KeyEvent) {
    let event = match key.code {
        KeyCode::Char('a') => DialogEvent::Approve,
        KeyCode::Char('d') => DialogEvent::Deny,
        KeyCode::Esc | KeyCode::Char('x') => DialogEvent::Dismiss,
        KeyCode::Char(':') => {
            app.enter_command();
            return;
        }
        _ => return,
    };
    app.apply_action(Action::Review(event));
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Up => app.recall_last_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let Some(size) = terminal_rect() else {
        return;
    };
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.handle_click(size, col, row),
        MouseEventKind::ScrollUp => app.handle_scroll(size, col, row, true),
        MouseEventKind::ScrollDown => app.handle_scroll(size, col, row, false),
        _ => {}
    }
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}
