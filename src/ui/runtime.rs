use std::io;
use std::time::Duration;

use crate::cli::Cli;
use crate::fetch::{RecipeClient, DEFAULT_BASE_URL};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(runtime: &tokio::runtime::Runtime, cli: &Cli) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(cli.tick_ms);
    let mut app = App::new(tick_rate.as_secs_f32());
    let events = EventHandler::new(tick_rate);

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    // The single outbound request of the session. Its completion comes back
    // through the event channel; if the loop below has already exited, the
    // send fails and the result is discarded.
    let fetch_tx = events.sender();
    let letter = cli.letter;
    runtime.spawn(async move {
        let client = RecipeClient::new(DEFAULT_BASE_URL);
        let outcome = client.search_by_letter(letter).await;
        let _ = fetch_tx.send(AppEvent::Recipes(outcome));
    });

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
            Ok(AppEvent::Recipes(outcome)) => app.on_recipes(outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
