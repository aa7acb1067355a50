//! reqwest-based API client
//!
//! Talks to a json-server style REST API:
//! - `GET    {base}/courses`
//! - `GET    {base}/authors`
//! - `POST   {base}/courses`        (create, no id)
//! - `PUT    {base}/courses/{id}`   (update)
//! - `DELETE {base}/courses/{id}`

use crate::client::CourseApi;
use crate::error::{ApiError, ApiResult};
use crate::types::{Author, Course, CourseId};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

/// Direct HTTP client for the course API
#[derive(Debug, Clone)]
pub struct HttpCourseApi {
    http: Client,
    base_url: String,
}

impl HttpCourseApi {
    /// Create a client for the given base URL (e.g. `http://localhost:3001`)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let base_url = normalize_base_url(&base_url.into())?;
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// The normalized base URL (no trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn courses_url(&self) -> String {
        format!("{}/courses", self.base_url)
    }

    fn course_url(&self, id: CourseId) -> String {
        format!("{}/courses/{}", self.base_url, id)
    }

    fn authors_url(&self) -> String {
        format!("{}/authors", self.base_url)
    }
}

#[async_trait]
impl CourseApi for HttpCourseApi {
    async fn get_courses(&self) -> ApiResult<Vec<Course>> {
        debug!("GET {}", self.courses_url());
        let response = self.http.get(self.courses_url()).send().await?;
        let courses: Vec<Course> = check_status(response).await?.json().await?;
        debug!("Fetched {} courses", courses.len());
        Ok(courses)
    }

    async fn get_authors(&self) -> ApiResult<Vec<Author>> {
        debug!("GET {}", self.authors_url());
        let response = self.http.get(self.authors_url()).send().await?;
        let authors: Vec<Author> = check_status(response).await?.json().await?;
        debug!("Fetched {} authors", authors.len());
        Ok(authors)
    }

    async fn save_course(&self, course: &Course) -> ApiResult<Course> {
        let request = match course.id {
            Some(id) => {
                debug!("PUT {}", self.course_url(id));
                self.http.put(self.course_url(id))
            }
            None => {
                debug!("POST {}", self.courses_url());
                self.http.post(self.courses_url())
            }
        };

        let response = request.json(course).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            if let Some(id) = course.id {
                return Err(ApiError::NotFound(id));
            }
        }
        Ok(check_status(response).await?.json().await?)
    }

    async fn delete_course(&self, id: CourseId) -> ApiResult<()> {
        debug!("DELETE {}", self.course_url(id));
        let response = self.http.delete(self.course_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id));
        }
        check_status(response).await?;
        Ok(())
    }
}

/// Turn non-success responses into `ApiError::Status`
///
/// json-server answers validation failures with a 400 and a plain-text
/// body ("Title is required."), which becomes the error message.
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if status == StatusCode::BAD_REQUEST && !body.trim().is_empty() {
        body.trim().to_string()
    } else {
        status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string()
    };

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

fn normalize_base_url(raw: &str) -> ApiResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty());

    if has_host {
        Ok(trimmed.to_string())
    } else {
        Err(ApiError::InvalidBaseUrl(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:3001/").unwrap(),
            "http://localhost:3001"
        );
        assert_eq!(
            normalize_base_url(" https://api.example.com/v1// ").unwrap(),
            "https://api.example.com/v1"
        );
    }

    #[test]
    fn test_normalize_rejects_missing_scheme_or_host() {
        assert!(matches!(
            normalize_base_url("localhost:3001"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            normalize_base_url("http://"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(normalize_base_url("").is_err());
    }

    #[test]
    fn test_endpoint_urls() {
        let api = HttpCourseApi::new("http://localhost:3001/", Duration::from_secs(1)).unwrap();
        assert_eq!(api.base_url(), "http://localhost:3001");
        assert_eq!(api.courses_url(), "http://localhost:3001/courses");
        assert_eq!(api.course_url(CourseId(12)), "http://localhost:3001/courses/12");
        assert_eq!(api.authors_url(), "http://localhost:3001/authors");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_transport_error() {
        // Port 9 (discard) is not expected to run an HTTP server
        let api = HttpCourseApi::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        let result = api.get_courses().await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
