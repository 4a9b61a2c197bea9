//! Headless mode runner - event loop without TUI

use std::time::{Duration, Instant};

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use shell_app::{signals, LayoutSession, Message, SessionEvent, StorageWatcher};
use shell_core::prelude::*;

use super::command::{CommandOutcome, HeadlessCommand};
use super::{emit, HeadlessEvent};

/// Run a session against stdin/stdout until `quit`, EOF or a signal
pub async fn run_headless(mut session: LayoutSession, watcher: Option<StorageWatcher>) -> Result<()> {
    info!("Studio Shell starting in HEADLESS mode");

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    let signal_task = signals::spawn_signal_handler(msg_tx.clone());

    let mut watcher = watcher;
    if let Some(w) = watcher.as_mut() {
        if let Err(e) = w.start(msg_tx.clone()) {
            warn!("Failed to start storage watcher: {}", e);
        }
    }

    let (cmd_tx, cmd_rx) = mpsc::channel::<HeadlessCommand>(256);
    std::thread::spawn(move || read_stdin_blocking(cmd_tx));

    let mut events = session.subscribe();
    session.mount();
    emit(&HeadlessEvent::ready(&session.current_url()));
    forward_events(&mut events);

    let result = headless_event_loop(&mut session, &mut events, msg_rx, cmd_rx).await;

    signal_task.abort();
    if let Some(w) = watcher.as_mut() {
        w.stop();
    }
    session.shutdown();
    forward_events(&mut events);

    info!("Studio Shell headless mode exiting");
    result
}

async fn headless_event_loop(
    session: &mut LayoutSession,
    events: &mut broadcast::Receiver<SessionEvent>,
    mut msg_rx: mpsc::Receiver<Message>,
    mut cmd_rx: mpsc::Receiver<HeadlessCommand>,
) -> Result<()> {
    while !session.should_quit() {
        let flush_in = session.time_until_flush(Instant::now());

        tokio::select! {
            Some(msg) = msg_rx.recv() => session.process_message(msg),

            cmd = cmd_rx.recv() => match cmd {
                Some(cmd) => {
                    if let CommandOutcome::Reply(reply) = cmd.apply(session) {
                        emit(&reply);
                    }
                }
                None => {
                    info!("Stdin closed");
                    // Let a pending trailing resize land before leaving
                    if let Some(wait) = session.time_until_flush(Instant::now()) {
                        tokio::time::sleep(wait).await;
                        session.tick(Instant::now());
                        forward_events(events);
                    }
                    break;
                }
            },

            _ = tokio::time::sleep(flush_in.unwrap_or(Duration::ZERO)), if flush_in.is_some() => {
                session.tick(Instant::now());
            }
        }

        forward_events(events);
    }

    Ok(())
}

/// Write every queued session event to stdout
fn forward_events(events: &mut broadcast::Receiver<SessionEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => emit(&event),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output lagged, {} event(s) dropped", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Parse stdin lines into commands. Bad lines are reported, not fatal.
fn read_stdin_blocking(cmd_tx: mpsc::Sender<HeadlessCommand>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match HeadlessCommand::parse(trimmed) {
            Ok(cmd) => {
                let quit = cmd == HeadlessCommand::Quit;
                if cmd_tx.blocking_send(cmd).is_err() || quit {
                    break;
                }
            }
            Err(e) => {
                warn!("Unknown stdin command: {}", trimmed);
                emit(&HeadlessEvent::error(format!("invalid command: {e}")));
            }
        }
    }

    info!("Stdin reader exiting");
}
