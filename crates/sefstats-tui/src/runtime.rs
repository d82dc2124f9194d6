use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc;

use sefstats_core::api::StatsClient;
use sefstats_core::events::StatsEvent;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

pub(crate) async fn run_app(terminal: &mut Tui, app: &mut App, client: StatsClient) -> Result<()> {
    // Create async event stream for terminal events
    let mut event_stream = EventStream::new();

    // Tick drives the spinner and the user-id debounce
    let mut tick_interval = tokio::time::interval(Duration::from_millis(50));

    let (stats_tx, mut stats_rx) = mpsc::channel::<StatsEvent>(16);

    // The site fetch is unconditional; the user fetch starts on whatever
    // uid was resolved at startup.
    spawn_site_fetch(client.clone(), stats_tx.clone());
    spawn_user_fetch(client.clone(), app.requested_uid(), stats_tx.clone());

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            // Terminal UI events
            maybe_event = event_stream.next() => {
                if let Some(Ok(Event::Key(key))) = maybe_event {
                    if key.kind == KeyEventKind::Press {
                        if key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            if app.pending_quit {
                                // Second Ctrl+C - quit immediately
                                app.quit();
                            } else {
                                // First Ctrl+C - set pending (footer shows warning)
                                app.pending_quit = true;
                            }
                        } else {
                            // Any other key clears pending quit state
                            app.pending_quit = false;
                            handle_key(app, key);
                        }
                    }
                }
            }

            // Completed fetches, in whatever order they finish
            Some(event) = stats_rx.recv() => {
                app.apply_event(event);
            }

            _ = tick_interval.tick() => {
                app.tick();
                // A quiesced user-id edit turns into exactly one fetch
                if let Some(uid) = app.poll_uid_commit(Instant::now()) {
                    spawn_user_fetch(client.clone(), uid, stats_tx.clone());
                }
            }
        }

        if let Some(request) = app.take_refetch() {
            if request.site {
                app.begin_site_fetch();
                spawn_site_fetch(client.clone(), stats_tx.clone());
            }
            if request.user {
                let uid = app.requested_uid();
                app.begin_user_fetch(uid);
                spawn_user_fetch(client.clone(), uid, stats_tx.clone());
            }
        }
    }
    Ok(())
}

fn spawn_site_fetch(client: StatsClient, tx: mpsc::Sender<StatsEvent>) {
    tokio::spawn(async move {
        let event = match client.site_stats().await {
            Ok(stats) => StatsEvent::SiteLoaded(stats),
            Err(err) => {
                tracing::warn!(error = %err, "site stats fetch failed");
                StatsEvent::SiteFailed(err.to_string())
            }
        };
        let _ = tx.send(event).await;
    });
}

fn spawn_user_fetch(client: StatsClient, uid: u64, tx: mpsc::Sender<StatsEvent>) {
    tokio::spawn(async move {
        let event = match client.user_stats(uid).await {
            Ok(stats) => StatsEvent::UserLoaded { uid, stats },
            Err(err) => {
                tracing::warn!(uid, error = %err, "user stats fetch failed");
                StatsEvent::UserFailed {
                    uid,
                    error: err.to_string(),
                }
            }
        };
        let _ = tx.send(event).await;
    });
}
