//! Background worker thread that runs the middleware chain
//!
//! - Main thread renders, reads input and reduces
//! - The worker pulls actions off the action channel, runs them through the
//!   chain and forwards survivors to the main thread
//! - API calls are spawned on the API middleware's runtime, so a slow call
//!   never blocks the chain

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, Instant};

/// Latest reduced state; written by the main thread, read by the worker
pub type SharedState = Arc<RwLock<AppState>>;

/// Spinner animation rate
const TICK_RATE: Duration = Duration::from_millis(150);

/// How long the worker blocks waiting for an action
const RECV_TIMEOUT: Duration = Duration::from_millis(10);

/// Whether the worker keeps running after an action
enum Flow {
    Continue,
    Stop,
}

struct Worker {
    action_rx: Receiver<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
}

/// Spawn the worker thread
///
/// `action_tx` is only used to build the [`Dispatcher`] handed to middleware,
/// so dispatched actions re-enter the chain from the start.
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    let worker = Worker {
        action_rx,
        result_tx,
        state,
        middleware,
        dispatcher: Dispatcher::new(action_tx),
    };
    thread::spawn(move || worker.run())
}

impl Worker {
    fn run(mut self) {
        log::info!("Background worker started");
        let mut next_tick = Instant::now() + TICK_RATE;

        loop {
            let flow = match self.action_rx.recv_timeout(RECV_TIMEOUT) {
                Ok(action) => self.process(action),
                Err(RecvTimeoutError::Timeout) => Flow::Continue,
                Err(RecvTimeoutError::Disconnected) => {
                    log::info!("Action channel closed");
                    Flow::Stop
                }
            };
            if let Flow::Stop = flow {
                break;
            }

            if Instant::now() >= next_tick {
                if let Flow::Stop = self.forward(Action::Global(GlobalAction::Tick)) {
                    break;
                }
                next_tick = Instant::now() + TICK_RATE;
            }
        }

        log::info!("Background worker stopped");
    }

    fn process(&mut self, action: Action) -> Flow {
        // Quit bypasses the chain so shutdown cannot be swallowed
        if matches!(action, Action::Global(GlobalAction::Quit)) {
            log::info!("Background worker received shutdown signal");
            self.forward(action);
            return Flow::Stop;
        }

        let snapshot = match self.state.read() {
            Ok(state) => state.clone(),
            Err(e) => {
                log::error!("Shared state is poisoned, dropping {:?}: {}", action, e);
                return Flow::Continue;
            }
        };

        let dispatcher = &self.dispatcher;
        let survived = self
            .middleware
            .iter_mut()
            .all(|mw| mw.handle(&action, &snapshot, dispatcher));

        if survived {
            self.forward(action)
        } else {
            Flow::Continue
        }
    }

    fn forward(&self, action: Action) -> Flow {
        match self.result_tx.send(action) {
            Ok(()) => Flow::Continue,
            Err(_) => {
                log::error!("Main thread is gone, stopping background worker");
                Flow::Stop
            }
        }
    }
}
