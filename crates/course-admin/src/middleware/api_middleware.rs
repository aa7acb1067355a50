//! API Middleware
//!
//! Executes `Action::Api(task)` requests. Each task is one call against the
//! course API, spawned on this middleware's runtime. Outcomes come back as
//! plain actions through the dispatcher:
//!
//! - tracked task started: `ApiStatusAction::CallStarted`
//! - success: the payload action (`Loaded`, `Saved`, `Deleted`)
//! - failure: `ApiStatusAction::CallFailed` (tracked tasks only), the
//!   task's failure action and an error notification

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use course_api::{ApiError, ApiResult, CourseApi};
use tokio::runtime::Runtime;

use crate::actions::{
    Action, ApiStatusAction, ApiTask, AuthorAction, CourseAction, StatusBarAction,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Loads currently running, keyed by task label
type InFlight = Arc<Mutex<HashSet<&'static str>>>;

pub struct ApiMiddleware {
    runtime: Runtime,
    api: Arc<dyn CourseApi>,
    in_flight: InFlight,
}

impl ApiMiddleware {
    pub fn new(api: Arc<dyn CourseApi>) -> std::io::Result<Self> {
        Ok(Self {
            runtime: Runtime::new()?,
            api,
            in_flight: Arc::default(),
        })
    }

    fn execute(&self, task: ApiTask, dispatcher: &Dispatcher) {
        let load = is_load(&task).then(|| task.label());
        if let Some(label) = load {
            if !lock(&self.in_flight).insert(label) {
                log::debug!("{} already in flight, skipping", label);
                return;
            }
        }

        if task.tracks_loading() {
            dispatcher.dispatch(Action::ApiStatus(ApiStatusAction::CallStarted));
        }

        let api = Arc::clone(&self.api);
        let in_flight = Arc::clone(&self.in_flight);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            log::debug!("{}: calling API", task.label());
            let outcome = perform(api.as_ref(), &task).await;

            if let Some(label) = load {
                lock(&in_flight).remove(label);
            }

            match outcome {
                Ok(actions) => {
                    log::debug!("{}: done", task.label());
                    for action in actions {
                        dispatcher.dispatch(action);
                    }
                }
                Err(error) => {
                    log::error!("{} failed: {}", task.label(), error);
                    if task.tracks_loading() {
                        dispatcher.dispatch(Action::ApiStatus(ApiStatusAction::CallFailed));
                    }
                    dispatcher.dispatch(failure_outcome(&task, error.to_string()));
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                        format!("{} failed: {}", task.label(), error),
                        task.label(),
                    )));
                }
            }
        });
    }
}

fn is_load(task: &ApiTask) -> bool {
    matches!(task, ApiTask::LoadCourses | ApiTask::LoadAuthors)
}

/// Run one task and build its success actions
async fn perform(api: &dyn CourseApi, task: &ApiTask) -> ApiResult<Vec<Action>> {
    let actions = match task {
        ApiTask::LoadCourses => {
            vec![Action::Course(CourseAction::Loaded(api.get_courses().await?))]
        }
        ApiTask::LoadAuthors => {
            vec![Action::Author(AuthorAction::Loaded(api.get_authors().await?))]
        }
        ApiTask::SaveCourse(course) => {
            let saved = api.save_course(course).await?;
            let notice = StatusBarAction::success(
                format!("Saved \"{}\"", saved.title),
                task.label(),
            );
            vec![
                Action::Course(CourseAction::Saved(saved)),
                Action::StatusBar(notice),
            ]
        }
        ApiTask::DeleteCourse { course, .. } => {
            let id = course.id.ok_or_else(|| {
                ApiError::Validation("Course has not been saved yet.".to_string())
            })?;
            api.delete_course(id).await?;
            vec![Action::Course(CourseAction::Deleted(id))]
        }
    };
    Ok(actions)
}

fn failure_outcome(task: &ApiTask, error: String) -> Action {
    match task {
        ApiTask::LoadCourses => Action::Course(CourseAction::LoadFailed(error)),
        ApiTask::LoadAuthors => Action::Author(AuthorAction::LoadFailed(error)),
        ApiTask::SaveCourse(_) => Action::Course(CourseAction::SaveFailed(error)),
        ApiTask::DeleteCourse { course, index } => Action::Course(CourseAction::DeleteFailed {
            course: course.clone(),
            index: *index,
            error,
        }),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Middleware for ApiMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Api(task) = action {
            self.execute(task.clone(), dispatcher);
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::test_support::recording_dispatcher;
    use async_trait::async_trait;
    use course_api::{Author, Course, CourseId, InMemoryCourseApi};
    use std::sync::mpsc::Receiver;
    use std::time::Duration;

    /// Every call fails with a 500
    struct BrokenApi;

    #[async_trait]
    impl CourseApi for BrokenApi {
        async fn get_courses(&self) -> ApiResult<Vec<Course>> {
            Err(broken())
        }
        async fn get_authors(&self) -> ApiResult<Vec<Author>> {
            Err(broken())
        }
        async fn save_course(&self, _course: &Course) -> ApiResult<Course> {
            Err(broken())
        }
        async fn delete_course(&self, _id: CourseId) -> ApiResult<()> {
            Err(broken())
        }
    }

    fn broken() -> ApiError {
        ApiError::Status {
            status: 500,
            message: "database on fire".to_string(),
        }
    }

    /// Collect actions until `done` sees the last one expected
    fn collect_until(rx: &Receiver<Action>, done: impl Fn(&Action) -> bool) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = rx.recv_timeout(Duration::from_secs(2)) {
            let finished = done(&action);
            actions.push(action);
            if finished {
                break;
            }
        }
        actions
    }

    #[test]
    fn test_api_actions_are_consumed() {
        let (dispatcher, _rx) = recording_dispatcher();
        let mut middleware = ApiMiddleware::new(Arc::new(InMemoryCourseApi::seeded())).unwrap();
        let state = AppState::default();

        assert!(!middleware.handle(&Action::Api(ApiTask::LoadAuthors), &state, &dispatcher));
        assert!(middleware.handle(&Action::None, &state, &dispatcher));
    }

    #[test]
    fn test_load_courses_success() {
        let (dispatcher, rx) = recording_dispatcher();
        let mut middleware = ApiMiddleware::new(Arc::new(InMemoryCourseApi::seeded())).unwrap();

        middleware.handle(
            &Action::Api(ApiTask::LoadCourses),
            &AppState::default(),
            &dispatcher,
        );

        let actions = collect_until(&rx, |a| matches!(a, Action::Course(_)));
        assert!(matches!(
            actions[0],
            Action::ApiStatus(ApiStatusAction::CallStarted)
        ));
        match &actions[1] {
            Action::Course(CourseAction::Loaded(courses)) => assert_eq!(courses.len(), 10),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_failed_save_reports_everywhere() {
        let (dispatcher, rx) = recording_dispatcher();
        let mut middleware = ApiMiddleware::new(Arc::new(BrokenApi)).unwrap();

        middleware.handle(
            &Action::Api(ApiTask::SaveCourse(Course::with_title("T"))),
            &AppState::default(),
            &dispatcher,
        );

        let actions = collect_until(&rx, |a| matches!(a, Action::StatusBar(_)));
        assert_eq!(actions.len(), 4);
        assert!(matches!(
            actions[1],
            Action::ApiStatus(ApiStatusAction::CallFailed)
        ));
        match &actions[2] {
            Action::Course(CourseAction::SaveFailed(error)) => {
                assert!(error.contains("database on fire"))
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_failed_delete_is_untracked_and_restores() {
        let (dispatcher, rx) = recording_dispatcher();
        let mut middleware = ApiMiddleware::new(Arc::new(BrokenApi)).unwrap();
        let course = Course {
            id: Some(CourseId(4)),
            ..Course::with_title("Gone")
        };

        middleware.handle(
            &Action::Api(ApiTask::DeleteCourse {
                course: course.clone(),
                index: 3,
            }),
            &AppState::default(),
            &dispatcher,
        );

        let actions = collect_until(&rx, |a| matches!(a, Action::StatusBar(_)));
        assert!(!actions
            .iter()
            .any(|a| matches!(a, Action::ApiStatus(_))));
        match &actions[0] {
            Action::Course(CourseAction::DeleteFailed {
                course: restored,
                index,
                ..
            }) => {
                assert_eq!(restored, &course);
                assert_eq!(*index, 3);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_load_is_skipped_while_in_flight() {
        let (dispatcher, rx) = recording_dispatcher();
        let api = InMemoryCourseApi::seeded().with_latency(Duration::from_millis(200));
        let mut middleware = ApiMiddleware::new(Arc::new(api)).unwrap();
        let state = AppState::default();

        middleware.handle(&Action::Api(ApiTask::LoadAuthors), &state, &dispatcher);
        middleware.handle(&Action::Api(ApiTask::LoadAuthors), &state, &dispatcher);

        let actions = collect_until(&rx, |a| matches!(a, Action::Author(_)));
        let started = actions
            .iter()
            .filter(|a| matches!(a, Action::ApiStatus(ApiStatusAction::CallStarted)))
            .count();
        assert_eq!(started, 1);
    }
}
