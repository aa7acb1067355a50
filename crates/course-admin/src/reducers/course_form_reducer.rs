//! Course Form Reducer
//!
//! Drives the manage-course form through its phases. The form depends on the
//! course and author collections, which are passed in already reduced for the
//! current action.

use course_api::{Author, Course};

use crate::actions::{Action, AuthorAction, CourseAction, CourseFormAction, Cycle};
use crate::selectors::{find_course, CourseSelection};
use crate::state::{CourseFormState, FormField, FormPhase, Loaded};

/// Collections the form reads from
#[derive(Debug, Clone, Copy)]
pub struct FormContext<'a> {
    pub courses: &'a [Course],
    pub authors: &'a [Author],
    pub loaded: Loaded,
}

pub fn reduce_course_form(
    mut form: CourseFormState,
    action: &Action,
    ctx: FormContext<'_>,
) -> CourseFormState {
    match action {
        Action::CourseForm(action) => form = reduce_form_action(form, action, ctx),

        Action::Course(CourseAction::Saved(course)) if form.phase == FormPhase::Saving => {
            log::info!("Course \"{}\" saved", course.title);
            form.draft = course.clone();
            form.phase = FormPhase::Saved;
        }
        Action::Course(CourseAction::SaveFailed(error)) if form.phase == FormPhase::Saving => {
            form.phase = FormPhase::SaveFailed(error.clone());
        }

        Action::Course(CourseAction::LoadFailed(error))
        | Action::Author(AuthorAction::LoadFailed(error))
            if form.phase == FormPhase::Loading =>
        {
            form.phase = FormPhase::LoadFailed(error.clone());
        }

        _ => {}
    }

    if form.phase == FormPhase::Loading {
        form = resolve(form, ctx);
    }
    form
}

fn reduce_form_action(
    mut form: CourseFormState,
    action: &CourseFormAction,
    ctx: FormContext<'_>,
) -> CourseFormState {
    match action {
        CourseFormAction::Open { slug } => {
            log::debug!("Opening course form for {:?}", slug);
            return CourseFormState::open(slug.clone());
        }

        CourseFormAction::Char(c) => {
            if form.accepts_input() {
                if let Some(text) = form.text_mut(form.focused) {
                    text.push(*c);
                    touch(&mut form);
                }
            }
        }
        CourseFormAction::Backspace => {
            if form.accepts_input() {
                if let Some(text) = form.text_mut(form.focused) {
                    text.pop();
                    touch(&mut form);
                }
            }
        }
        CourseFormAction::ClearField => {
            if form.accepts_input() {
                match form.focused {
                    FormField::Author => form.draft.author_id = None,
                    field => {
                        if let Some(text) = form.text_mut(field) {
                            text.clear();
                        }
                    }
                }
                touch(&mut form);
            }
        }

        CourseFormAction::NextField => {
            if form.accepts_input() {
                form.focused = form.focused.next();
            }
        }
        CourseFormAction::PrevField => {
            if form.accepts_input() {
                form.focused = form.focused.prev();
            }
        }

        CourseFormAction::CycleAuthor(direction) => {
            if form.accepts_input() && form.focused == FormField::Author && !ctx.authors.is_empty()
            {
                let current = form
                    .draft
                    .author_id
                    .and_then(|id| ctx.authors.iter().position(|a| a.id == id));
                let last = ctx.authors.len() - 1;
                let next = match (current, direction) {
                    (None, Cycle::Forward) => 0,
                    (None, Cycle::Backward) => last,
                    (Some(i), Cycle::Forward) => (i + 1) % ctx.authors.len(),
                    (Some(i), Cycle::Backward) => i.checked_sub(1).unwrap_or(last),
                };
                form.draft.author_id = Some(ctx.authors[next].id);
                touch(&mut form);
            }
        }

        CourseFormAction::Submit => {
            if form.accepts_input() {
                form.phase = FormPhase::Validating;
                form.errors.clear();
            }
        }
        CourseFormAction::ValidationFailed(errors) => {
            if form.phase == FormPhase::Validating {
                form.errors = errors.clone();
                if let Some(first) = errors.keys().next() {
                    form.focused = *first;
                }
                form.phase = FormPhase::Editing;
            }
        }
        CourseFormAction::ValidationPassed => {
            if form.phase == FormPhase::Validating {
                form.phase = FormPhase::Saving;
            }
        }

        CourseFormAction::Reload => {
            if matches!(form.phase, FormPhase::LoadFailed(_) | FormPhase::NotFound) {
                form.phase = FormPhase::Loading;
            }
        }

        // Navigation away is handled by the course form middleware
        CourseFormAction::Cancel => {}
    }
    form
}

/// An edit after a failed save starts a new editing round
fn touch(form: &mut CourseFormState) {
    form.errors.remove(&form.focused);
    form.phase = FormPhase::Editing;
}

/// Leave the loading phase once the form's dependencies are known
fn resolve(mut form: CourseFormState, ctx: FormContext<'_>) -> CourseFormState {
    match find_course(ctx.courses, ctx.loaded.courses, form.slug.as_deref()) {
        CourseSelection::New if ctx.loaded.authors => {
            form.draft = Course::default();
            form.phase = FormPhase::Editing;
        }
        CourseSelection::Found(course) if ctx.loaded.authors => {
            form.draft = course;
            form.phase = FormPhase::Editing;
        }
        CourseSelection::Missing(slug) => {
            log::warn!("No course with slug \"{}\"", slug);
            form.phase = FormPhase::NotFound;
        }
        CourseSelection::New | CourseSelection::Found(_) | CourseSelection::Pending(_) => {}
    }
    form
}
