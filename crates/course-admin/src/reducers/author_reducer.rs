//! Author Reducer

use course_api::Author;
use std::sync::Arc;

use crate::actions::{Action, AuthorAction};

/// Authors are replaced wholesale when loaded; everything else keeps the `Arc`
pub fn reduce_authors(authors: Arc<Vec<Author>>, action: &Action) -> Arc<Vec<Author>> {
    match action {
        Action::Author(AuthorAction::Loaded(loaded)) => {
            log::info!("Loaded {} authors", loaded.len());
            Arc::new(loaded.clone())
        }
        _ => authors,
    }
}
