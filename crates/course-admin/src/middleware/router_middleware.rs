//! Router Middleware
//!
//! Turns `Route` actions into a view-stack replacement and mounts views as
//! they are pushed, dispatching whatever the view needs on arrival (form
//! reset, API loads).

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct RouterMiddleware;

impl RouterMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RouterMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for RouterMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Route(route) => {
                log::info!("Navigating to {}", route.path());
                dispatcher.dispatch(Action::Global(GlobalAction::ReplaceView(route.view())));
                false
            }
            Action::Global(GlobalAction::PushView(view))
            | Action::Global(GlobalAction::ReplaceView(view)) => {
                for mount_action in view.on_mount(state) {
                    dispatcher.dispatch(mount_action);
                }
                true
            }
            _ => true,
        }
    }
}
