//! Follow-up actions decided on reduced state
//!
//! Middleware runs on the background worker and only sees the last state the
//! main thread published, which can lag behind keystrokes still in the
//! channel. Anything that must read the user's latest input (the draft being
//! submitted, the row under the cursor, the typed title) is decided here
//! instead: the store calls [`follow_up`] on the main thread right after each
//! reduction and dispatches the result through the middleware chain.
//!
//! ```text
//! (previous state, action, next state) ──▶ Vec<Action>
//! ```

use crate::actions::{
    Action, ApiTask, CourseFormAction, CourseListAction, PathPromptAction, QuickAddAction,
    StatusBarAction,
};
use crate::routes::Route;
use crate::selectors::selected_course;
use crate::state::{validate_course, AppState, FormPhase};
use crate::views::ViewId;

/// Actions to dispatch after `action` turned `prev` into `next`
pub fn follow_up(prev: &AppState, action: &Action, next: &AppState) -> Vec<Action> {
    let mut actions = match action {
        Action::CourseList(CourseListAction::EditSelected) => edit_selected(next),
        Action::CourseList(CourseListAction::DeleteSelected) => deleted_selected(prev),
        Action::QuickAdd(QuickAddAction::Confirm) => quick_add_confirmed(prev),
        Action::PathPrompt(PathPromptAction::Confirm) => path_confirmed(prev),
        _ => Vec::new(),
    };
    actions.extend(form_transition(prev, next));
    actions
}

fn edit_selected(state: &AppState) -> Vec<Action> {
    match selected_course(state) {
        Some((_, course)) if course.slug.is_empty() => vec![Action::StatusBar(
            StatusBarAction::warning("Course has not been saved yet.", "Courses"),
        )],
        Some((_, course)) => vec![Action::Route(Route::ManageCourse(Some(
            course.slug.clone(),
        )))],
        None => Vec::new(),
    }
}

/// The reducer already removed the row; confirm it and tell the API
fn deleted_selected(prev: &AppState) -> Vec<Action> {
    let Some((index, course)) = selected_course(prev) else {
        return Vec::new();
    };

    let mut actions = vec![Action::StatusBar(StatusBarAction::info(
        format!("Deleted \"{}\"", course.title),
        "Courses",
    ))];
    if course.is_persisted() {
        actions.push(Action::Api(ApiTask::DeleteCourse {
            course: course.clone(),
            index,
        }));
    }
    actions
}

fn quick_add_confirmed(prev: &AppState) -> Vec<Action> {
    let popup_open = prev
        .active_view()
        .is_some_and(|v| v.view_id() == ViewId::QuickAddCourse);
    if !popup_open {
        return Vec::new();
    }

    let title = prev.quick_add.title.trim();
    let notice = if title.is_empty() {
        StatusBarAction::warning("Title is required.", "Quick add")
    } else {
        StatusBarAction::success(format!("Added \"{}\"", title), "Quick add")
    };
    vec![Action::StatusBar(notice)]
}

fn path_confirmed(prev: &AppState) -> Vec<Action> {
    let input = prev.path_prompt.input.trim();
    if input.is_empty() {
        return vec![Action::StatusBar(StatusBarAction::warning(
            "Type a path such as /courses.",
            "Go to",
        ))];
    }
    vec![Action::Route(Route::parse(input))]
}

/// Validation when a submit lands, navigation when a save lands
fn form_transition(prev: &AppState, next: &AppState) -> Vec<Action> {
    let (before, after) = (&prev.course_form, &next.course_form);

    match (&before.phase, &after.phase) {
        (FormPhase::Validating, _) | (_, FormPhase::Editing | FormPhase::Loading) => Vec::new(),

        (_, FormPhase::Validating) => {
            let errors = validate_course(&after.draft);
            if errors.is_empty() {
                vec![
                    Action::CourseForm(CourseFormAction::ValidationPassed),
                    Action::Api(ApiTask::SaveCourse(after.draft.clone())),
                ]
            } else {
                log::debug!("Course draft rejected: {:?}", errors);
                vec![
                    Action::CourseForm(CourseFormAction::ValidationFailed(errors)),
                    Action::StatusBar(StatusBarAction::warning(
                        "Please fix the highlighted fields.",
                        "Manage course",
                    )),
                ]
            }
        }

        (FormPhase::Saving, FormPhase::Saved) => {
            let still_on_form = next
                .base_view()
                .is_some_and(|v| v.view_id() == ViewId::ManageCourse);
            if still_on_form {
                vec![Action::Route(Route::Courses)]
            } else {
                Vec::new()
            }
        }

        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CourseAction;
    use crate::reducers::app_reducer::reduce;
    use crate::state::{CourseFormState, CourseListState, PathPromptState, QuickAddState};
    use crate::views::{CoursesView, ManageCourseView, PathPromptView, QuickAddCourseView};
    use course_api::{Author, AuthorId, Course, CourseId};
    use std::sync::Arc;

    /// Reduce `action` and return the follow-ups with the new state
    fn step(state: AppState, action: Action) -> (AppState, Vec<Action>) {
        let next = reduce(state.clone(), &action);
        let actions = follow_up(&state, &action, &next);
        (next, actions)
    }

    fn persisted(id: u64, title: &str, slug: &str) -> Course {
        Course {
            id: Some(CourseId(id)),
            slug: slug.to_string(),
            ..Course::with_title(title)
        }
    }

    fn course_list(courses: Vec<Course>, selected: usize) -> AppState {
        AppState {
            view_stack: vec![Box::new(CoursesView::new())],
            courses: Arc::new(courses),
            course_list: CourseListState { selected },
            ..AppState::default()
        }
    }

    fn editing_form(draft: Course) -> AppState {
        AppState {
            view_stack: vec![Box::new(ManageCourseView::new(None))],
            authors: Arc::new(vec![Author::new(1, "Cory House")]),
            course_form: CourseFormState {
                phase: FormPhase::Editing,
                draft,
                ..CourseFormState::default()
            },
            ..AppState::default()
        }
    }

    #[test]
    fn test_edit_selected_routes_to_form() {
        let state = course_list(vec![persisted(1, "A", "a"), persisted(2, "B", "b")], 1);
        let (_, actions) = step(state, Action::CourseList(CourseListAction::EditSelected));
        match &actions[..] {
            [Action::Route(Route::ManageCourse(Some(slug)))] => assert_eq!(slug, "b"),
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_edit_of_unsaved_course_warns() {
        let state = course_list(vec![Course::with_title("Draft")], 0);
        let (_, actions) = step(state, Action::CourseList(CourseListAction::EditSelected));
        assert!(matches!(
            actions[..],
            [Action::StatusBar(StatusBarAction::Push { .. })]
        ));
    }

    #[test]
    fn test_move_then_delete_targets_the_new_row() {
        let state = course_list(vec![persisted(1, "A", "a"), persisted(2, "B", "b")], 0);

        let (state, _) = step(state, Action::CourseList(CourseListAction::NavigateNext));
        let (state, actions) = step(state, Action::CourseList(CourseListAction::DeleteSelected));

        assert_eq!(state.courses.len(), 1);
        assert_eq!(state.courses[0].title, "A");
        match &actions[..] {
            [Action::StatusBar(_), Action::Api(ApiTask::DeleteCourse { course, index })] => {
                assert_eq!(course.title, "B");
                assert_eq!(*index, 1);
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_delete_unsaved_course_is_local_only() {
        let state = course_list(vec![Course::with_title("Draft")], 0);
        let (state, actions) = step(state, Action::CourseList(CourseListAction::DeleteSelected));
        assert!(state.courses.is_empty());
        assert_eq!(actions.len(), 1);
        assert!(!actions.iter().any(|a| matches!(a, Action::Api(_))));
    }

    #[test]
    fn test_delete_on_empty_list_does_nothing() {
        let (_, actions) = step(
            course_list(vec![], 0),
            Action::CourseList(CourseListAction::DeleteSelected),
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn test_quick_add_reports_once() {
        let mut state = course_list(vec![], 0);
        state.view_stack.push(Box::new(QuickAddCourseView::new()));
        state.quick_add = QuickAddState {
            title: "Rust".to_string(),
        };

        let (state, first) = step(state, Action::QuickAdd(QuickAddAction::Confirm));
        let (_, second) = step(state, Action::QuickAdd(QuickAddAction::Confirm));

        assert!(matches!(first[..], [Action::StatusBar(_)]));
        assert!(second.is_empty());
    }

    #[test]
    fn test_blank_quick_add_warns() {
        let mut state = course_list(vec![], 0);
        state.view_stack.push(Box::new(QuickAddCourseView::new()));

        let (next, actions) = step(state, Action::QuickAdd(QuickAddAction::Confirm));
        assert!(next.courses.is_empty());
        match &actions[..] {
            [Action::StatusBar(StatusBarAction::Push { message, .. })] => {
                assert_eq!(message.as_str(), "Title is required.")
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_path_prompt_routes_to_typed_path() {
        let state = AppState {
            view_stack: vec![
                Box::new(CoursesView::new()),
                Box::new(PathPromptView::new()),
            ],
            path_prompt: PathPromptState {
                input: "/course/clean-code".to_string(),
            },
            ..AppState::default()
        };

        let (next, actions) = step(state, Action::PathPrompt(PathPromptAction::Confirm));
        assert_eq!(next.view_stack.len(), 1);
        match &actions[..] {
            [Action::Route(Route::ManageCourse(Some(slug)))] => assert_eq!(slug, "clean-code"),
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_submit_saves_the_latest_draft() {
        let state = editing_form(Course {
            author_id: Some(AuthorId(1)),
            category: "Go".to_string(),
            ..Course::with_title("G")
        });

        // The last keystroke and the submit are reduced back to back
        let (state, typed) = step(state, Action::CourseForm(CourseFormAction::Char('o')));
        assert!(typed.is_empty());
        // Focus is on the title field
        let (state, actions) = step(state, Action::CourseForm(CourseFormAction::Submit));

        assert_eq!(state.course_form.phase, FormPhase::Validating);
        match &actions[..] {
            [Action::CourseForm(CourseFormAction::ValidationPassed), Action::Api(ApiTask::SaveCourse(draft))] => {
                assert_eq!(draft.title, "Go")
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_draft_is_not_saved() {
        let state = editing_form(Course::with_title("Only a title"));
        let (_, actions) = step(state, Action::CourseForm(CourseFormAction::Submit));

        match &actions[0] {
            Action::CourseForm(CourseFormAction::ValidationFailed(errors)) => {
                assert_eq!(errors.len(), 2)
            }
            other => panic!("unexpected action: {:?}", other),
        }
        assert!(!actions.iter().any(|a| matches!(a, Action::Api(_))));
    }

    #[test]
    fn test_submit_while_saving_is_ignored() {
        let mut state = editing_form(Course::with_title("T"));
        state.course_form.phase = FormPhase::Saving;
        let (_, actions) = step(state, Action::CourseForm(CourseFormAction::Submit));
        assert!(actions.is_empty());
    }

    #[test]
    fn test_saved_course_returns_to_list() {
        let mut state = editing_form(Course::with_title("T"));
        state.course_form.phase = FormPhase::Saving;

        let (next, actions) = step(
            state,
            Action::Course(CourseAction::Saved(persisted(9, "T", "t"))),
        );
        assert_eq!(next.course_form.phase, FormPhase::Saved);
        assert!(matches!(actions[..], [Action::Route(Route::Courses)]));
    }

    #[test]
    fn test_save_landing_elsewhere_does_not_navigate() {
        let mut state = editing_form(Course::with_title("T"));
        state.course_form.phase = FormPhase::Saving;
        state.view_stack = vec![Box::new(CoursesView::new())];

        let (_, actions) = step(
            state,
            Action::Course(CourseAction::Saved(persisted(9, "T", "t"))),
        );
        assert!(actions.is_empty());
    }
}
