mod app;
mod config;
mod fact;
mod logging;
mod ui;

use crate::app::event::AppEvent;
use crate::app::handler::{self, UiCommand};
use crate::app::runner::EffectRunner;
use crate::app::state::AppState;
use crate::app::store::Store;
use crate::fact::NumbersApiClient;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::{Stream, StreamExt};
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;
    info!(base_url = %cfg.fact_service.base_url, "starting numfact");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        error!(error = %e, "exiting with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("exiting");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut store = Store::new(AppState::new());
    let client = NumbersApiClient::new(cfg.fact_service.base_url.clone());
    let runner = EffectRunner::new(Arc::new(client), event_tx.clone());
    let service_host = cfg.fact_service.host().to_string();

    // Spawn terminal input task
    tokio::spawn(forward_terminal_events(EventStream::new(), event_tx));

    // Initial render
    terminal.draw(|f| ui::render(f, store.state(), &service_host))?;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        let action = match event {
            AppEvent::Terminal(tevent) => {
                let size = terminal.size()?;
                let viewport = Rect::new(0, 0, size.width, size.height);
                match handler::handle_terminal(store.state(), tevent, viewport) {
                    Some(UiCommand::Dispatch(action)) => Some(action),
                    Some(UiCommand::Quit) => break,
                    None => None,
                }
            }
            AppEvent::Action(action) => Some(action),
            AppEvent::InputClosed => break,
        };

        if let Some(action) = action {
            if let Some(effect) = store.dispatch(action) {
                runner.run(effect);
            }
        }

        // Redraw after every event; resizes land here too.
        terminal.draw(|f| ui::render(f, store.state(), &service_host))?;
    }

    Ok(())
}

/// Pump terminal events into the app channel until the stream ends, then
/// report that input is gone so the run loop can exit.
async fn forward_terminal_events<S>(mut reader: S, tx: mpsc::UnboundedSender<AppEvent>)
where
    S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
{
    loop {
        match reader.next().await {
            Some(Ok(event)) => {
                if tx.send(AppEvent::Terminal(event)).is_err() {
                    return;
                }
            }
            Some(Err(e)) => {
                warn!(error = %e, "terminal input failed");
                break;
            }
            None => break,
        }
    }
    let _ = tx.send(AppEvent::InputClosed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};
    use futures::stream;

    #[tokio::test]
    async fn test_input_error_reports_closed() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let key = CrosstermEvent::Key(KeyEvent::from(KeyCode::Char('+')));
        let events = stream::iter(vec![
            Ok(key),
            Err(io::Error::new(io::ErrorKind::Other, "tty gone")),
            Ok(CrosstermEvent::FocusGained),
        ]);

        forward_terminal_events(events, tx).await;

        assert!(matches!(rx.recv().await, Some(AppEvent::Terminal(CrosstermEvent::Key(_)))));
        assert!(matches!(rx.recv().await, Some(AppEvent::InputClosed)));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_input_end_reports_closed() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        forward_terminal_events(stream::iter(Vec::<io::Result<CrosstermEvent>>::new()), tx).await;

        assert!(matches!(rx.recv().await, Some(AppEvent::InputClosed)));
    }
}
