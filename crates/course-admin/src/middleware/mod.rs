use std::sync::Arc;

use course_api::CourseApi;

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod api_middleware;
pub mod course_form_middleware;
pub mod course_list_middleware;
pub mod keyboard_middleware;
pub mod logging;
pub mod navigation_middleware;
pub mod router_middleware;
pub mod text_input_middleware;

pub use api_middleware::ApiMiddleware;
pub use course_form_middleware::CourseFormMiddleware;
pub use course_list_middleware::CourseListMiddleware;
pub use keyboard_middleware::KeyboardMiddleware;
pub use logging::LoggingMiddleware;
pub use navigation_middleware::NavigationMiddleware;
pub use router_middleware::RouterMiddleware;
pub use text_input_middleware::TextInputMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the background thread. Anything slow (API calls) is
/// spawned onto a runtime so the chain keeps moving.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Snapshot of the state as last reduced by the main thread
    /// - `dispatcher`: Actions dispatched here re-enter the chain from the start
    ///
    /// Returns `true` to continue the chain, `false` to consume the action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}

/// The full middleware chain, in execution order
pub fn default_chain(api: ApiMiddleware) -> Vec<Box<dyn Middleware>> {
    vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(NavigationMiddleware::new()),
        Box::new(TextInputMiddleware::new()),
        Box::new(RouterMiddleware::new()),
        Box::new(CourseListMiddleware::new()),
        Box::new(CourseFormMiddleware::new()),
        Box::new(api),
    ]
}

/// Build the chain around an API client, creating the runtime for its calls
pub fn chain_for(api: Arc<dyn CourseApi>) -> std::io::Result<Vec<Box<dyn Middleware>>> {
    Ok(default_chain(ApiMiddleware::new(api)?))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::mpsc::{self, Receiver};

    use super::*;

    /// A dispatcher whose actions can be inspected
    pub fn recording_dispatcher() -> (Dispatcher, Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (Dispatcher::new(tx), rx)
    }

    pub fn drain(rx: &Receiver<Action>) -> Vec<Action> {
        rx.try_iter().collect()
    }
}
