//! Courses/authors API client
//!
//! This crate provides a trait-based client for the course catalog REST API.
//! The views and middleware only ever talk to the `CourseApi` trait, so the
//! real HTTP client and the in-memory mock are interchangeable.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                CourseApi trait                   │
//! │  - get_courses()                                 │
//! │  - get_authors()                                 │
//! │  - save_course()                                 │
//! │  - delete_course()                               │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ HttpCourseApi   │         │ InMemoryCourseApi   │
//! │ (json-server)   │         │ (seeded mock data)  │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use course_api::{CourseApi, HttpCourseApi};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), course_api::ApiError> {
//! let api = HttpCourseApi::new("http://localhost:3001", Duration::from_secs(10))?;
//! let courses = api.get_courses().await?;
//! println!("{} courses", courses.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod in_memory_client;
pub mod types;

pub use client::CourseApi;
pub use error::{ApiError, ApiResult};
pub use http_client::HttpCourseApi;
pub use in_memory_client::InMemoryCourseApi;
pub use types::{Author, AuthorId, Course, CourseId};
