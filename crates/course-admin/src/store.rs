//! Store - owns application state and runs the unidirectional loop
//!
//! ```text
//!  dispatch ──▶ action channel ──▶ background worker (middleware chain)
//!                     ▲                         │
//!                     ├──── Dispatcher ◀────────┤
//!                     │                         ▼
//!  follow-ups ◀── reduce (main thread) ◀── result channel
//!                     │
//!                     ▼
//!                subscribers
//! ```
//!
//! Reduction happens only in [`Store::process_pending`], one action at a
//! time, on the thread that owns the store. Follow-up actions (see
//! [`crate::effects`]) are decided on the freshly reduced state and go back
//! through the middleware chain.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, RwLock};
use std::thread::JoinHandle;

use thiserror::Error;

use crate::actions::{Action, CourseListAction, GlobalAction, QuickAddAction};
use crate::background::{spawn_background_worker, SharedState};
use crate::dispatcher::Dispatcher;
use crate::effects::follow_up;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;

type Listener = Box<dyn FnMut(&AppState)>;

pub struct Store {
    state: AppState,
    shared: SharedState,
    action_tx: Sender<Action>,
    result_rx: Receiver<Action>,
    worker: Option<JoinHandle<()>>,
    listeners: Vec<Listener>,
}

impl Store {
    /// Create the store and start the background worker running `middleware`
    pub fn new(initial_state: AppState, middleware: Vec<Box<dyn Middleware>>) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let shared = Arc::new(RwLock::new(initial_state.clone()));

        let worker = spawn_background_worker(
            action_rx,
            action_tx.clone(),
            result_tx,
            Arc::clone(&shared),
            middleware,
        );

        Self {
            state: initial_state,
            shared,
            action_tx,
            result_rx,
            worker: Some(worker),
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// A dispatcher feeding this store's middleware chain
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.action_tx.clone())
    }

    /// Send an action through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Store: failed to dispatch action: {}", e);
        }
    }

    /// Call `listener` with the new state after every reduced action
    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Reduce every action the middleware chain has forwarded so far
    ///
    /// Returns the number of actions applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.result_rx.try_recv() {
                Ok(action) => {
                    self.apply(&action);
                    applied += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.state.running {
                        log::error!("Background worker is gone, stopping");
                        self.state.running = false;
                    }
                    break;
                }
            }
        }
        applied
    }

    fn apply(&mut self, action: &Action) {
        let next = reduce(self.state.clone(), action);

        if cfg!(debug_assertions) {
            if let Err(violation) = check_reduction(&self.state, action, &next) {
                log::error!("{} (action: {:?})", violation, action);
                debug_assert!(false, "{}", violation);
            }
        }

        let follow_ups = follow_up(&self.state, action, &next);
        self.state = next;

        // Publish before the follow-ups reach the worker
        match self.shared.write() {
            Ok(mut shared) => *shared = self.state.clone(),
            Err(e) => log::error!("Failed to publish state to background worker: {}", e),
        }

        for listener in &mut self.listeners {
            listener(&self.state);
        }

        for action in follow_ups {
            self.dispatch(action);
        }
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        // Ignore send errors: the worker may already have stopped
        let _ = self.action_tx.send(Action::Global(GlobalAction::Quit));
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("Background worker panicked");
            }
        }
    }
}

/// A reducer broke the sharing contract of the `Arc` collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReductionViolation {
    #[error("courses were rebuilt by an action that does not concern them")]
    CoursesRebuilt,
    #[error("authors were rebuilt by an action that does not concern them")]
    AuthorsRebuilt,
}

/// Check that collections an action does not address keep their allocation
///
/// The previous state itself cannot be changed in place: `reduce` consumes a
/// clone and the collections have no interior mutability. What can go wrong
/// is a reducer rebuilding a collection it should have handed back, which
/// would make subscribers see a change that never happened.
pub fn check_reduction(
    prev: &AppState,
    action: &Action,
    next: &AppState,
) -> Result<(), ReductionViolation> {
    let courses_addressed = matches!(
        action,
        Action::Course(_)
            | Action::CourseList(CourseListAction::DeleteSelected)
            | Action::QuickAdd(QuickAddAction::Confirm)
    );
    if !courses_addressed && !Arc::ptr_eq(&prev.courses, &next.courses) {
        return Err(ReductionViolation::CoursesRebuilt);
    }

    let authors_addressed = matches!(action, Action::Author(_));
    if !authors_addressed && !Arc::ptr_eq(&prev.authors, &next.authors) {
        return Err(ReductionViolation::AuthorsRebuilt);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CourseAction, CourseFormAction, Cycle, StatusBarAction};
    use crate::middleware::chain_for;
    use crate::routes::Route;
    use crate::selectors::courses_with_author_names;
    use crate::state::{FormPhase, StatusKind};
    use crate::views::ViewId;
    use course_api::{Course, InMemoryCourseApi};
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::thread;
    use std::time::{Duration, Instant};

    fn store_with(api: Arc<InMemoryCourseApi>) -> Store {
        let middleware = chain_for(api).expect("runtime");
        Store::new(AppState::default(), middleware)
    }

    /// Reduce until `done` holds, failing after a few seconds
    fn wait_for(store: &mut Store, what: &str, done: impl Fn(&AppState) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            store.process_pending();
            if done(store.state()) {
                return;
            }
            assert!(Instant::now() < deadline, "timed out waiting for {}", what);
            thread::sleep(Duration::from_millis(5));
        }
    }

    fn press(store: &Store, code: KeyCode) {
        store.dispatch(Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            code,
            KeyModifiers::NONE,
        ))));
    }

    fn settled(state: &AppState) -> bool {
        state.loaded.courses && state.loaded.authors && !state.api_call_status.is_loading()
    }

    #[test]
    fn test_quick_add_from_the_keyboard() {
        let api = Arc::new(InMemoryCourseApi::seeded());
        let mut store = store_with(Arc::clone(&api));

        store.dispatch(Action::Route(Route::Courses));
        wait_for(&mut store, "courses to load", settled);
        let before = store.state().courses.len();

        press(&store, KeyCode::Char('a'));
        wait_for(&mut store, "quick add popup", |s| {
            s.active_view().map(|v| v.view_id()) == Some(ViewId::QuickAddCourse)
        });

        // Enter follows the typing without waiting for it to be reduced
        for c in "Rust Basics".chars() {
            press(&store, KeyCode::Char(c));
        }
        press(&store, KeyCode::Enter);
        wait_for(&mut store, "popup to close", |s| {
            s.courses.len() == before + 1 && s.view_stack.len() == 1
        });

        let state = store.state();
        let items = courses_with_author_names(&state.courses, &state.authors).unwrap();
        assert_eq!(
            items.iter().filter(|item| item.title == "Rust Basics").count(),
            1
        );
        assert_eq!(state.quick_add.title, "");
        assert_eq!(
            state.status_bar.latest().map(|m| m.kind),
            Some(StatusKind::Success)
        );
        // Quick add is local only
        assert_eq!(api.courses().len(), before);
    }

    #[test]
    fn test_move_and_delete_in_one_burst() {
        let api = Arc::new(InMemoryCourseApi::seeded());
        let mut store = store_with(Arc::clone(&api));

        store.dispatch(Action::Route(Route::Courses));
        wait_for(&mut store, "courses to load", settled);
        let before: Vec<_> = store.state().courses.iter().cloned().collect();
        assert!(before.len() >= 2);

        press(&store, KeyCode::Char('j'));
        press(&store, KeyCode::Char('d'));
        wait_for(&mut store, "delete to reach the api", |s| {
            s.courses.len() == before.len() - 1 && api.courses().len() == before.len() - 1
        });

        let state = store.state();
        assert_eq!(state.courses[0].id, before[0].id);
        assert!(state.courses.iter().all(|c| c.id != before[1].id));
        assert!(api.courses().iter().all(|c| c.id != before[1].id));
        assert!(api.courses().iter().any(|c| c.id == before[0].id));
    }

    #[test]
    fn test_rejected_save_keeps_courses_and_reports() {
        let api = Arc::new(InMemoryCourseApi::seeded());
        let mut store = store_with(Arc::clone(&api));

        store.dispatch(Action::Route(Route::ManageCourse(None)));
        wait_for(&mut store, "blank form", |s| {
            settled(s) && s.course_form.phase == FormPhase::Editing
        });
        let courses_before = Arc::clone(&store.state().courses);

        let mut form_actions: Vec<CourseFormAction> =
            "Rust".chars().map(CourseFormAction::Char).collect();
        form_actions.push(CourseFormAction::NextField);
        form_actions.push(CourseFormAction::CycleAuthor(Cycle::Forward));
        form_actions.push(CourseFormAction::NextField);
        form_actions.extend("Systems".chars().map(CourseFormAction::Char));
        for action in form_actions {
            store.dispatch(Action::CourseForm(action));
        }
        wait_for(&mut store, "filled draft", |s| {
            s.course_form.draft.category == "Systems"
        });
        assert!(store.state().course_form.draft.author_id.is_some());

        api.fail_next_with("Server is down");
        store.dispatch(Action::CourseForm(CourseFormAction::Submit));
        wait_for(&mut store, "failed save", |s| {
            matches!(s.course_form.phase, FormPhase::SaveFailed(_))
                && !s.api_call_status.is_loading()
        });

        let state = store.state();
        assert_eq!(*state.courses, *courses_before);
        assert_eq!(
            state.status_bar.latest().map(|m| m.kind),
            Some(StatusKind::Error)
        );
        assert_eq!(
            state.active_view().map(|v| v.view_id()),
            Some(ViewId::ManageCourse)
        );
        assert_eq!(api.courses().len(), courses_before.len());
    }

    #[test]
    fn test_successful_save_returns_to_list() {
        let api = Arc::new(InMemoryCourseApi::seeded());
        let mut store = store_with(Arc::clone(&api));

        store.dispatch(Action::Route(Route::ManageCourse(None)));
        wait_for(&mut store, "blank form", |s| {
            settled(s) && s.course_form.phase == FormPhase::Editing
        });
        let count = store.state().courses.len();

        for action in [
            CourseFormAction::Char('G'),
            CourseFormAction::Char('o'),
            CourseFormAction::NextField,
            CourseFormAction::CycleAuthor(Cycle::Backward),
            CourseFormAction::NextField,
            CourseFormAction::Char('X'),
            CourseFormAction::Submit,
        ] {
            store.dispatch(Action::CourseForm(action));
        }
        wait_for(&mut store, "course list", |s| {
            s.active_view().map(|v| v.view_id()) == Some(ViewId::Courses)
        });

        let state = store.state();
        assert_eq!(state.courses.len(), count + 1);
        let saved = state.courses.iter().find(|c| c.title == "Go").unwrap();
        assert_eq!(saved.slug, "go");
        assert_eq!(saved.category, "X");
        assert!(saved.is_persisted());

        let stored = api.courses();
        assert_eq!(stored.len(), count + 1);
        assert!(stored.iter().any(|c| c.title == "Go"));
        assert!(stored.iter().all(|c| c.title != "G"));
    }

    #[test]
    fn test_rebuilt_collections_are_reported() {
        let prev = AppState::default();
        let touched = AppState {
            courses: Arc::new(vec![Course::with_title("Go")]),
            ..prev.clone()
        };

        let notice = Action::StatusBar(StatusBarAction::info("hello", "test"));
        assert_eq!(
            check_reduction(&prev, &notice, &touched),
            Err(ReductionViolation::CoursesRebuilt)
        );

        let create = Action::Course(CourseAction::Create(Course::with_title("Go")));
        assert_eq!(check_reduction(&prev, &create, &touched), Ok(()));

        let reloaded = AppState {
            authors: Arc::new(Vec::new()),
            ..prev.clone()
        };
        assert_eq!(
            check_reduction(&prev, &create, &reloaded),
            Err(ReductionViolation::AuthorsRebuilt)
        );
    }

    #[test]
    fn test_reducers_pass_the_reduction_check() {
        let prev = AppState::default();
        let notice = Action::StatusBar(StatusBarAction::info("hello", "test"));
        let next = reduce(prev.clone(), &notice);
        assert_eq!(check_reduction(&prev, &notice, &next), Ok(()));
    }

    #[test]
    fn test_quit_stops_the_store() {
        let mut store = store_with(Arc::new(InMemoryCourseApi::seeded()));
        store.dispatch(Action::Global(GlobalAction::Quit));
        wait_for(&mut store, "quit", |s| !s.running);
    }
}
