//! Root reducer
//!
//! Handles the global actions and the view stack itself, then runs every
//! slice reducer. Actions that mean "the selected course" or "the typed
//! title" are expanded into the course event they imply, resolved against
//! the state they are reduced on, and that event is reduced right after.

use course_api::Course;

use crate::actions::{
    Action, CourseAction, CourseListAction, GlobalAction, PathPromptAction, QuickAddAction,
};
use crate::reducers::{
    api_reducer::{reduce_api_status, reduce_loaded},
    author_reducer::reduce_authors,
    course_form_reducer::{reduce_course_form, FormContext},
    course_list_reducer::reduce_course_list,
    course_reducer::reduce_courses,
    prompt_reducer::{reduce_path_prompt, reduce_quick_add},
    status_bar_reducer::reduce_status_bar,
};
use crate::selectors::selected_course;
use crate::state::AppState;
use crate::views::ViewId;

/// Pure function that produces new state from current state + action
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => {
            if reduce_global(&mut state, global) {
                return state;
            }
        }
        // A blank input keeps its popup open
        Action::QuickAdd(QuickAddAction::Confirm) if !state.quick_add.title.trim().is_empty() => {
            close_popup(&mut state, ViewId::QuickAddCourse)
        }
        Action::QuickAdd(QuickAddAction::Close) => close_popup(&mut state, ViewId::QuickAddCourse),
        Action::PathPrompt(PathPromptAction::Confirm)
            if !state.path_prompt.input.trim().is_empty() =>
        {
            close_popup(&mut state, ViewId::PathPrompt)
        }
        Action::PathPrompt(PathPromptAction::Close) => close_popup(&mut state, ViewId::PathPrompt),
        _ => {}
    }

    let implied = implied_course_event(&state, action);

    state = reduce_slices(state, action);
    if let Some(event) = implied {
        state = reduce_slices(state, &event);
    }
    state
}

/// Returns `true` when reduction stops here (quit)
fn reduce_global(state: &mut AppState, global: &GlobalAction) -> bool {
    match global {
        GlobalAction::Quit => {
            state.running = false;
            return true;
        }
        GlobalAction::PushView(new_view) => {
            let already_on_top = state
                .active_view()
                .is_some_and(|top| top.view_id() == new_view.view_id());
            if already_on_top {
                log::debug!("View {:?} is already on top", new_view.view_id());
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                state.view_stack.push(new_view.clone());
            }
        }
        GlobalAction::ReplaceView(new_view) => {
            log::debug!("Replacing view stack with: {:?}", new_view.view_id());
            state.view_stack.clear();
            state.view_stack.push(new_view.clone());
        }
        GlobalAction::Close => {
            // Popups close; closing the last view quits
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        GlobalAction::Tick => {
            if state.api_call_status.is_loading() {
                state.tick = state.tick.wrapping_add(1);
            }
        }
        GlobalAction::KeyPressed(_) => {}
    }
    false
}

/// Pop the popup `id` if it is on top; anything else stays
fn close_popup(state: &mut AppState, id: ViewId) {
    let on_top = state.view_stack.len() > 1
        && state.active_view().is_some_and(|v| v.view_id() == id);
    if on_top {
        state.view_stack.pop();
        log::debug!("Closed popup {:?}", id);
    }
}

/// The course event a list or quick-add action stands for in `state`
fn implied_course_event(state: &AppState, action: &Action) -> Option<Action> {
    match action {
        Action::CourseList(CourseListAction::DeleteSelected) => {
            selected_course(state).map(|(index, course)| {
                Action::Course(CourseAction::Delete {
                    course: course.clone(),
                    index,
                })
            })
        }
        Action::QuickAdd(QuickAddAction::Confirm) => {
            let title = state.quick_add.title.trim();
            (!title.is_empty())
                .then(|| Action::Course(CourseAction::Create(Course::with_title(title))))
        }
        _ => None,
    }
}

fn reduce_slices(mut state: AppState, action: &Action) -> AppState {
    state.courses = reduce_courses(state.courses, action);
    state.authors = reduce_authors(state.authors, action);
    state.loaded = reduce_loaded(state.loaded, action);
    state.api_call_status = reduce_api_status(state.api_call_status, action);
    state.course_list = reduce_course_list(state.course_list, action, state.courses.len());
    state.course_form = reduce_course_form(
        state.course_form,
        action,
        FormContext {
            courses: &state.courses,
            authors: &state.authors,
            loaded: state.loaded,
        },
    );
    state.quick_add = reduce_quick_add(state.quick_add, action);
    state.path_prompt = reduce_path_prompt(state.path_prompt, action);
    if let Action::StatusBar(status_action) = action {
        state.status_bar = reduce_status_bar(state.status_bar, status_action);
    }

    state
}
