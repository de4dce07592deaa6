use crate::api::ApiClient;
use crate::clipboard::ClipboardHandler;
use crate::host::HostUser;
use crate::ui::app::{App, Tab};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::{RequestWorker, COMMAND_QUEUE_CAPACITY};
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Runs the interactive client until the user quits.
///
/// Backend requests execute on `runtime`; the UI loop itself stays on the
/// calling thread.
pub fn run(
    runtime: &Handle,
    client: ApiClient,
    news_page_size: u32,
    host_user: Option<HostUser>,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
    let worker = RequestWorker::new(client, news_page_size, events.sender());
    runtime.spawn(worker.run(command_rx));

    let mut app = App::new(host_user);
    app.set_command_sender(command_tx);
    app.select_tab(Tab::News);

    let mut clipboard = ClipboardHandler::new();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => match handle_key(&mut app, key) {
                InputAction::None => {}
                InputAction::CopyReferralLink => app.copy_referral_link(&mut clipboard),
            },
            Ok(AppEvent::Api(event)) => app.on_api_event(event),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
                terminal.autoresize()?;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("UI closed");
    Ok(())
}
