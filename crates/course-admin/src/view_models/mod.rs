pub mod course_form_view_model;
pub mod course_list_view_model;
pub mod header_tabs_view_model;
pub mod key_hints_view_model;
pub mod status_bar;

pub use course_form_view_model::{CourseFormBody, CourseFormViewModel, FieldViewModel};
pub use course_list_view_model::{CourseListContent, CourseListViewModel, CourseRowViewModel};
pub use header_tabs_view_model::{HeaderTabsViewModel, TabViewModel};
pub use key_hints_view_model::{KeyHintViewModel, KeyHintsViewModel};
pub use status_bar::StatusBarViewModel;

/// Braille spinner frames, advanced by the tick counter
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER[(tick % SPINNER.len() as u64) as usize]
}
