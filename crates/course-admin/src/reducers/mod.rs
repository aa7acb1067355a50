pub mod api_reducer;
pub mod app_reducer;
pub mod author_reducer;
pub mod course_form_reducer;
pub mod course_list_reducer;
pub mod course_reducer;
pub mod prompt_reducer;
pub mod status_bar_reducer;
