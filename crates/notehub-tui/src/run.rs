// ABOUTME: Terminal lifecycle and the main select loop
// ABOUTME: Bridges crossterm events, the debounce tick, and request outcomes

use crate::app::{Action, App};
use crate::client::{Client, Outcome};
use crate::ui;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// How often the UI wakes up to poll the debounce stamp and animate
const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
enum TuiEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Spawn the blocking crossterm poll loop. Emits Tick whenever no input
/// arrives inside the tick window.
fn spawn_event_task() -> mpsc::UnboundedReceiver<TuiEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || loop {
        if event::poll(TICK_RATE).unwrap_or(false) {
            if let Ok(evt) = event::read() {
                let tui_event = match evt {
                    Event::Key(key) => Some(TuiEvent::Key(key)),
                    Event::Resize(_, _) => Some(TuiEvent::Resize),
                    _ => None,
                };
                if let Some(e) = tui_event {
                    if tx.send(e).is_err() {
                        break;
                    }
                }
            }
        } else if tx.send(TuiEvent::Tick).is_err() {
            break;
        }
    });
    rx
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .context("failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}

/// Dispatch an action to the async side. Returns true when the app should
/// quit.
fn perform(client: &Client, action: Action) -> bool {
    match action {
        Action::Quit => true,
        Action::Fetch { query, request_id } => {
            client.fetch(query, request_id);
            false
        }
        Action::Create(draft) => {
            client.create(draft);
            false
        }
    }
}

/// Run the TUI until the user quits.
pub async fn run(
    app: &mut App,
    client: Client,
    mut outcomes: mpsc::Receiver<Outcome>,
) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, app, &client, &mut outcomes).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    client: &Client,
    outcomes: &mut mpsc::Receiver<Outcome>,
) -> Result<()> {
    let mut events = spawn_event_task();

    // First paint needs data behind it
    if let Some(action) = app.refresh() {
        perform(client, action);
    }

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        tokio::select! {
            Some(event) = events.recv() => match event {
                TuiEvent::Key(key) => {
                    if let Some(action) = app.handle_key(key) {
                        if perform(client, action) {
                            return Ok(());
                        }
                    }
                }
                TuiEvent::Tick => {
                    app.tick();
                    if let Some(action) = app.poll_search(Instant::now()) {
                        perform(client, action);
                    }
                }
                TuiEvent::Resize => {}
            },
            Some(outcome) = outcomes.recv() => {
                if let Some(action) = app.handle_outcome(outcome) {
                    perform(client, action);
                }
            }
            else => return Ok(()),
        }
    }
}
