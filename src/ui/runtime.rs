use crate::config::Config;
use crate::contacts::{spawn_fetch_worker, ContactStore};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the contact list until the user quits.
///
/// The UI runs on the calling thread; fetches and bubble timers run as
/// tasks on `runtime` and report back through the event queue.
pub fn run(config: &Config, store: Arc<dyn ContactStore>, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);

    let fetched_tx = events.sender();
    let fetch = spawn_fetch_worker(&runtime, store, move |outcome| {
        if fetched_tx.send(AppEvent::Fetched(outcome)).is_err() {
            tracing::debug!("Fetch result dropped (event loop gone)");
        }
    });

    let mut app = App::new(config, fetch, events.sender(), runtime);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.on_appear();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Fetched(outcome)) => app.on_fetch_outcome(outcome),
            Ok(AppEvent::BubbleTimer { token }) => app.on_bubble_timer(token),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("Contact list closed");
    drop(guard);
    Ok(())
}
