use std::sync::Arc;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use anyhow::Context;

use crate::client::DirectoryClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::effects::EffectRunner;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::users::UsersIntent;

/// Run the TUI against the configured directory API.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start effect runtime")?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let client = Arc::new(DirectoryClient::new(config.client.base_url.clone()));
    let mut effects = EffectRunner::new(client, runtime.handle().clone(), events.sender());
    let mut app = App::new();

    // Initial load, exactly once.
    dispatch(&mut app, &mut effects, UsersIntent::Fetch);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let Some(intent) = handle_key(&mut app, key) {
                    dispatch(&mut app, &mut effects, intent);
                }
            }
            Ok(AppEvent::EffectResult {
                kind,
                generation,
                intent,
            }) => {
                // Latest wins: results of superseded dispatches are dropped.
                if effects.accepts(kind, generation) {
                    app.apply_users(intent);
                }
            }
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Reduce a request intent into the state (loading flag) and start its
/// effect task.
fn dispatch(app: &mut App, effects: &mut EffectRunner, intent: UsersIntent) {
    effects.dispatch(&intent);
    app.apply_users(intent);
}
