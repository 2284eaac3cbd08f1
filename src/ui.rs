pub mod chat;
pub mod footer;
pub mod header;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

use crate::api::{ApiClient, LambdaReply};
use crate::app::App;
use crate::config::get_config;
use crate::errors::ChatResult;
use crate::key_handlers;

/// Runs the terminal UI until the user quits.
pub async fn run_ui() -> ChatResult<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Enum for the different event sources feeding the run loop.
enum Event {
    Input(CEvent),
    Tick,
}

/// Main loop of the application.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>) -> ChatResult<()> {
    let config = get_config();
    let mut app = App::new();

    // Channels joining the view to the request worker.
    let (query_tx, mut query_rx) = mpsc::channel::<String>(8);
    let (reply_tx, mut reply_rx) = mpsc::channel::<ChatResult<LambdaReply>>(8);

    // The worker owns the API client and the session id; the id is sent
    // unchanged with every request so the backend can correlate turns.
    let client = ApiClient::new(config.base_url.clone());
    let session_id = app.session_id().to_string();
    tokio::spawn(async move {
        while let Some(question) = query_rx.recv().await {
            let outcome = client.get_lambda_response(&question, &session_id).await;
            if reply_tx.send(outcome).await.is_err() {
                break;
            }
        }
    });

    // Task reading terminal events, interleaved with animation ticks.
    let (event_tx, mut event_rx) = mpsc::channel::<Event>(100);
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_millis(0));
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    if event_tx.send(Event::Input(ev)).await.is_err() {
                        return;
                    }
                }
            }
            if last_tick.elapsed() >= tick_rate {
                if event_tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        terminal.draw(|f| draw(f, &mut app))?;

        tokio::select! {
            Some(event) = event_rx.recv() => {
                match event {
                    Event::Input(CEvent::Key(key)) => {
                        key_handlers::handle_chat_input(key, &mut app, &query_tx).await;
                    }
                    Event::Input(_) => {}
                    Event::Tick => {
                        app.status_indicator.advance();
                    }
                }
            }
            Some(outcome) = reply_rx.recv() => {
                // Completion hook: the pending flag clears on success
                // and failure alike; failures only reach the log file.
                match outcome {
                    Ok(reply) => {
                        log::info!("response received from {}", reply.transmitter);
                        app.finish_request(Some(reply));
                    }
                    Err(e) => {
                        log::warn!("request failed: {e}");
                        app.finish_request(None);
                    }
                }
            }
            else => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Renders one frame: header, conversation view, footer.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1), // Header
                Constraint::Min(1),    // Conversation
                Constraint::Length(1), // Footer
            ]
            .as_ref(),
        )
        .split(f.area());

    header::draw_header(f, chunks[0]);
    chat::draw_chat(f, app, chunks[1]);
    footer::draw_footer(f, chunks[2]);
}
