//! Main TUI runner - entry point and event loop

use std::time::Instant;

use tokio::sync::mpsc;

use shell_app::message::Message;
use shell_app::{signals, LayoutSession, StorageWatcher};
use shell_core::prelude::*;

use crate::{event, render, terminal};

/// Run the terminal shell until the user quits or a signal arrives.
///
/// The session must be constructed but not yet mounted: mounting reads the
/// terminal size, so it happens after the terminal is initialised.
pub async fn run(mut session: LayoutSession, watcher: Option<StorageWatcher>) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    let signal_task = signals::spawn_signal_handler(msg_tx.clone());

    let mut watcher = watcher;
    if let Some(w) = watcher.as_mut() {
        if let Err(e) = w.start(msg_tx.clone()) {
            warn!("Failed to start storage watcher: {}", e);
        }
    }

    session.mount();
    let result = run_loop(&mut term, &mut session, msg_rx);

    signal_task.abort();
    if let Some(w) = watcher.as_mut() {
        w.stop();
    }
    session.shutdown();
    ratatui::restore();

    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    session: &mut LayoutSession,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    let tui_settings = session.settings().tui.clone();

    while !session.should_quit() {
        // External messages (signals, storage echoes)
        while let Ok(msg) = msg_rx.try_recv() {
            session.process_message(msg);
        }

        terminal.draw(|frame| render::view(frame, session))?;

        let now = Instant::now();
        let timeout = session
            .time_until_flush(now)
            .map_or(event::POLL_TIMEOUT, |t| t.min(event::POLL_TIMEOUT));

        match event::poll(timeout, &tui_settings)? {
            Some(Message::Tick) => session.tick(Instant::now()),
            Some(message) => session.process_message(message),
            None => {}
        }
    }

    Ok(())
}
