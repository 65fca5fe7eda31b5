//! HTTP-backed course source.

use crate::config::PATH_QUERY_PARAM;
use crate::core::CourseSource;
use crate::core::error::FetchError;
use crate::models::{Course, LearningPath};

use super::fetch::fetch_json;

/// Fetches `GET {endpoint}?path={label}` and decodes a JSON array of courses.
#[derive(Clone, Copy, Debug)]
pub struct HttpCourseSource {
    endpoint: &'static str,
}

impl HttpCourseSource {
    pub const fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }

    /// Request URL for `path`, with the label percent-encoded.
    pub fn url_for(&self, path: LearningPath) -> String {
        let value = String::from(js_sys::encode_uri_component(path.label()));
        format!("{}?{}={}", self.endpoint, PATH_QUERY_PARAM, value)
    }
}

impl CourseSource for HttpCourseSource {
    async fn fetch_courses(&self, path: LearningPath) -> Result<Vec<Course>, FetchError> {
        fetch_json::<Vec<Course>>(&self.url_for(path)).await
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    #[wasm_bindgen_test]
    fn test_url_encodes_label() {
        let source = HttpCourseSource::new("/api/courses");
        assert_eq!(
            source.url_for(LearningPath::AiMl),
            "/api/courses?path=AI%2FML"
        );
        assert_eq!(
            source.url_for(LearningPath::FullStack),
            "/api/courses?path=Full%20Stack"
        );
        assert_eq!(
            source.url_for(LearningPath::DevOps),
            "/api/courses?path=DevOps"
        );
    }
}
