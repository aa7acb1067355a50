//! Course List Reducer
//!
//! Cursor movement. The cursor is clamped to the list length after every
//! action, so it stays valid when courses disappear.

use crate::actions::{Action, CourseListAction};
use crate::state::CourseListState;

pub fn reduce_course_list(
    mut state: CourseListState,
    action: &Action,
    len: usize,
) -> CourseListState {
    if let Action::CourseList(action) = action {
        match action {
            CourseListAction::NavigateNext => {
                if len > 0 {
                    state.selected = (state.selected + 1) % len;
                }
            }
            CourseListAction::NavigatePrevious => {
                if len > 0 {
                    state.selected = state.selected.checked_sub(1).unwrap_or(len - 1);
                }
            }
            CourseListAction::NavigateToTop => state.selected = 0,
            CourseListAction::NavigateToBottom => state.selected = len.saturating_sub(1),
            // Side effects, handled by the middleware and the follow-ups
            CourseListAction::EditSelected
            | CourseListAction::New
            | CourseListAction::QuickAdd
            | CourseListAction::DeleteSelected
            | CourseListAction::Reload => {}
        }
    }
    state.clamped(len)
}
