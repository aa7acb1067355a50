//! View model for the manage-course form

use crate::state::{AppState, FormField, FormPhase};
use crate::view_models::spinner_frame;

#[derive(Debug, Clone)]
pub struct CourseFormViewModel {
    /// "Add Course" or "Edit Course"
    pub heading: String,
    pub body: CourseFormBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseFormBody {
    /// Waiting for courses or authors
    Loading(String),
    /// The form cannot be shown
    Message {
        text: String,
        detail: String,
        is_error: bool,
    },
    Form {
        fields: Vec<FieldViewModel>,
        /// Error returned by the last save
        banner: Option<String>,
        /// "Saving…" / "Saved." while the form is locked
        progress: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViewModel {
    pub label: &'static str,
    pub value: String,
    pub placeholder: Option<&'static str>,
    pub focused: bool,
    pub error: Option<String>,
}

impl CourseFormViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let form = &state.course_form;
        let heading = match form.slug {
            None => "Add Course",
            Some(_) => "Edit Course",
        }
        .to_string();

        let body = match &form.phase {
            FormPhase::Loading => {
                CourseFormBody::Loading(format!("{} Loading course…", spinner_frame(state.tick)))
            }
            FormPhase::LoadFailed(error) => CourseFormBody::Message {
                text: "Could not load courses and authors.".to_string(),
                detail: format!("{} Press Ctrl+R to retry.", error),
                is_error: true,
            },
            FormPhase::NotFound => CourseFormBody::Message {
                text: "Course not found.".to_string(),
                detail: format!(
                    "There is no course \"{}\".",
                    form.slug.as_deref().unwrap_or_default()
                ),
                is_error: false,
            },
            phase => {
                let editable = form.accepts_input();
                let fields = FormField::all()
                    .map(|field| FieldViewModel {
                        label: label(field),
                        value: field_value(state, field),
                        placeholder: placeholder(field),
                        focused: editable && form.focused == field,
                        error: form.errors.get(&field).cloned(),
                    })
                    .collect();

                CourseFormBody::Form {
                    fields,
                    banner: match phase {
                        FormPhase::SaveFailed(error) => Some(error.clone()),
                        _ => None,
                    },
                    progress: match phase {
                        FormPhase::Validating => Some("Checking…".to_string()),
                        FormPhase::Saving => {
                            Some(format!("{} Saving…", spinner_frame(state.tick)))
                        }
                        FormPhase::Saved => Some("Saved.".to_string()),
                        _ => None,
                    },
                }
            }
        };

        Self { heading, body }
    }
}

fn label(field: FormField) -> &'static str {
    match field {
        FormField::Title => "Title",
        FormField::Author => "Author",
        FormField::Category => "Category",
        FormField::Length => "Length",
    }
}

fn placeholder(field: FormField) -> Option<&'static str> {
    match field {
        FormField::Title => None,
        FormField::Author => Some("←/→ to choose"),
        FormField::Category => Some("e.g. JavaScript"),
        FormField::Length => Some("h:mm, e.g. 3:18"),
    }
}

fn field_value(state: &AppState, field: FormField) -> String {
    let draft = &state.course_form.draft;
    match field {
        FormField::Title => draft.title.clone(),
        FormField::Category => draft.category.clone(),
        FormField::Length => draft.length.clone(),
        FormField::Author => match draft.author_id {
            None => String::new(),
            Some(id) => state
                .authors
                .iter()
                .find(|author| author.id == id)
                .map(|author| author.name.clone())
                .unwrap_or_else(|| format!("author #{}", id)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CourseFormState;
    use course_api::{Author, AuthorId, Course};
    use std::sync::Arc;

    fn state_with_form(form: CourseFormState) -> AppState {
        AppState {
            authors: Arc::new(vec![Author::new(1, "Cory House")]),
            course_form: form,
            ..AppState::default()
        }
    }

    #[test]
    fn test_heading_depends_on_slug() {
        let vm = CourseFormViewModel::from_state(&state_with_form(CourseFormState::open(None)));
        assert_eq!(vm.heading, "Add Course");
        assert!(matches!(vm.body, CourseFormBody::Loading(_)));

        let vm = CourseFormViewModel::from_state(&state_with_form(CourseFormState::open(Some(
            "x".to_string(),
        ))));
        assert_eq!(vm.heading, "Edit Course");
    }

    #[test]
    fn test_fields_show_author_name_and_errors() {
        let mut form = CourseFormState::open(None);
        form.phase = FormPhase::Editing;
        form.focused = FormField::Category;
        form.draft = Course {
            author_id: Some(AuthorId(1)),
            ..Course::with_title("Clean Code")
        };
        form.errors
            .insert(FormField::Category, "Category is required.".to_string());

        let vm = CourseFormViewModel::from_state(&state_with_form(form));
        let CourseFormBody::Form { fields, banner, .. } = vm.body else {
            panic!("expected the form body");
        };
        assert_eq!(fields[1].value, "Cory House");
        assert!(fields[2].focused);
        assert_eq!(fields[2].error.as_deref(), Some("Category is required."));
        assert_eq!(banner, None);
    }

    #[test]
    fn test_save_failure_banner() {
        let mut form = CourseFormState::open(None);
        form.phase = FormPhase::SaveFailed("API responded with 500: boom".to_string());

        let vm = CourseFormViewModel::from_state(&state_with_form(form));
        assert!(matches!(
            vm.body,
            CourseFormBody::Form { banner: Some(ref e), .. } if e.contains("boom")
        ));
    }

    #[test]
    fn test_no_focus_while_saving() {
        let mut form = CourseFormState::open(None);
        form.phase = FormPhase::Saving;

        let vm = CourseFormViewModel::from_state(&state_with_form(form));
        let CourseFormBody::Form { fields, progress, .. } = vm.body else {
            panic!("expected the form body");
        };
        assert!(fields.iter().all(|f| !f.focused));
        assert!(progress.is_some());
    }
}
