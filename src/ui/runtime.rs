use crate::config::Config;
use crate::notify::ToastQueue;
use crate::profile::phone::find_country;
use crate::submit::{HttpProfileApi, SubmissionHandler};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::form::FormState;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs the form until the user quits. Blocks the calling thread; create
/// requests are spawned on `runtime`.
pub fn run(config: &Config, runtime: Handle) -> anyhow::Result<()> {
    let api = HttpProfileApi::new(&config.api).context("failed to set up the profile API client")?;
    tracing::info!(endpoint = api.url(), "Profile form starting");

    let toasts = ToastQueue::new();
    let submitter =
        SubmissionHandler::new(api, toasts.clone(), config.notifications.duration());
    let country = find_country(&config.form.default_country).unwrap_or(0);

    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(
        FormState::with_country(country),
        submitter,
        toasts,
        runtime,
        events.sender(),
    );

    let (mut terminal, guard) = setup_terminal()?;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            // Next draw picks up the new size.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::SubmitFinished(result)) => app.on_submit_finished(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Profile form closed");
    Ok(())
}
