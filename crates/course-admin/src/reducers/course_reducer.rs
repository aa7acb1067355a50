//! Course Reducer
//!
//! Owns `AppState::courses`. Every change builds a new vector; actions that
//! do not concern courses hand back the input `Arc` untouched.

use course_api::Course;
use std::sync::Arc;

use crate::actions::{Action, CourseAction};

pub fn reduce_courses(courses: Arc<Vec<Course>>, action: &Action) -> Arc<Vec<Course>> {
    let Action::Course(action) = action else {
        return courses;
    };

    match action {
        CourseAction::Create(course) => {
            log::debug!("Adding course \"{}\"", course.title);
            let mut next = Vec::with_capacity(courses.len() + 1);
            next.extend(courses.iter().cloned());
            next.push(course.clone());
            Arc::new(next)
        }

        CourseAction::Loaded(loaded) => {
            log::info!("Loaded {} courses", loaded.len());
            Arc::new(loaded.clone())
        }

        CourseAction::Saved(saved) => {
            let mut next: Vec<Course> = courses.iter().cloned().collect();
            match next.iter_mut().find(|c| c.id.is_some() && c.id == saved.id) {
                Some(existing) => *existing = saved.clone(),
                None => next.push(saved.clone()),
            }
            Arc::new(next)
        }

        CourseAction::Delete { course, index } => {
            let position = if courses.get(*index) == Some(course) {
                Some(*index)
            } else {
                courses.iter().position(|c| c == course)
            };

            match position {
                Some(position) => {
                    let mut next: Vec<Course> = courses.iter().cloned().collect();
                    next.remove(position);
                    Arc::new(next)
                }
                None => {
                    log::warn!("Course \"{}\" to delete is not in the list", course.title);
                    courses
                }
            }
        }

        CourseAction::DeleteFailed { course, index, .. } => {
            if course.id.is_some() && courses.iter().any(|c| c.id == course.id) {
                return courses;
            }
            log::info!("Restoring course \"{}\" after failed delete", course.title);
            let mut next: Vec<Course> = courses.iter().cloned().collect();
            next.insert((*index).min(next.len()), course.clone());
            Arc::new(next)
        }

        CourseAction::LoadFailed(_) | CourseAction::SaveFailed(_) | CourseAction::Deleted(_) => {
            courses
        }
    }
}
