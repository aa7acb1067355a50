//! Dispatcher for middleware action dispatch
//!
//! Actions sent through the Dispatcher re-enter the middleware chain from the
//! beginning (via the action channel feeding the background worker). This is
//! how a view's `Route` becomes a `ReplaceView`, which in turn mounts the
//! view and starts its API loads.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Sends actions through the middleware chain
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// `action_tx` must feed the background worker
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
