use anyhow::{Context, Result};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod background;
mod capabilities;
mod command_id;
mod dispatcher;
mod effects;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod routes;
mod selectors;
mod state;
mod store;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use course_admin_config::AppConfig;
use course_api::{CourseApi, HttpCourseApi, InMemoryCourseApi};
use routes::Route;
use state::AppState;
use store::Store;

/// Delay of the offline API, so the loading indicator is visible
const OFFLINE_LATENCY: Duration = Duration::from_millis(300);

/// How long to wait for input before checking the store again
const INPUT_POLL: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting course-admin, logging to {}", log_file.display());

    let config = AppConfig::load();
    let api = build_api(&config)?;
    let middleware = middleware::chain_for(api).context("starting the API runtime")?;

    let mut store = Store::new(AppState::new(config), middleware);
    let dirty = Rc::new(Cell::new(true));
    {
        let dirty = Rc::clone(&dirty);
        store.subscribe(move |_| dirty.set(true));
    }
    store.dispatch(Action::Route(Route::Home));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, &mut store, &dirty);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("Exiting course-admin");
    result
}

fn build_api(config: &AppConfig) -> Result<Arc<dyn CourseApi>> {
    if config.offline {
        log::info!("Offline mode: using the in-memory catalog");
        return Ok(Arc::new(
            InMemoryCourseApi::seeded().with_latency(OFFLINE_LATENCY),
        ));
    }

    log::info!("Using API at {}", config.api_base_url);
    let api = HttpCourseApi::new(config.api_base_url.clone(), config.request_timeout())
        .with_context(|| format!("invalid API configuration for {}", config.api_base_url))?;
    Ok(Arc::new(api))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    dirty: &Cell<bool>,
) -> Result<()> {
    loop {
        store.process_pending();
        if !store.state().running {
            break;
        }

        if dirty.replace(false) {
            terminal.draw(|frame| views::render(store.state(), frame.area(), frame))?;
        }

        if event::poll(INPUT_POLL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Resize(_, _) => dirty.set(true),
                _ => {}
            }
        }
    }

    Ok(())
}
