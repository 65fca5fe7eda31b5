//! Course records as served by the catalog endpoint.

use serde::Deserialize;

/// A single course in the catalog.
///
/// Wire names are camelCase (`videoUrl`, `thumbnailUrl`). `description`
/// may be absent or `null`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub video_url: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Course {
    /// Description text, if present and not blank.
    pub fn summary(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_array() {
        let json = r#"[
            {
                "id": "c1",
                "title": "Intro to Rust",
                "videoUrl": "https://cdn.example.com/v/c1.mp4",
                "thumbnailUrl": "https://cdn.example.com/t/c1.jpg",
                "description": "Ownership and borrowing"
            },
            {
                "id": "c2",
                "title": "Async Rust",
                "videoUrl": "/media/c2.mp4",
                "thumbnailUrl": "/media/c2.jpg",
                "description": null
            },
            {
                "id": "c3",
                "title": "Macros",
                "videoUrl": "/media/c3.mp4",
                "thumbnailUrl": "/media/c3.jpg"
            }
        ]"#;

        let courses: Vec<Course> = serde_json::from_str(json).unwrap();
        assert_eq!(courses.len(), 3);
        assert_eq!(courses[0].video_url, "https://cdn.example.com/v/c1.mp4");
        assert_eq!(courses[0].summary(), Some("Ownership and borrowing"));
        assert_eq!(courses[1].description, None);
        assert_eq!(courses[2].description, None);
    }

    #[test]
    fn test_decode_missing_required_field() {
        let json = r#"[{ "id": "c1", "title": "No media" }]"#;
        assert!(serde_json::from_str::<Vec<Course>>(json).is_err());
    }

    #[test]
    fn test_blank_description_has_no_summary() {
        let course = Course {
            id: "c1".to_string(),
            title: "Blank".to_string(),
            video_url: "/v".to_string(),
            thumbnail_url: "/t".to_string(),
            description: Some("   ".to_string()),
        };
        assert_eq!(course.summary(), None);
    }
}
