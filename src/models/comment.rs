use serde::{Deserialize, Serialize};

pub type CommentId = i64;

/// Output format for comment timestamps, e.g. `Jan 5, 2024, 03:04 PM`.
pub const DATE_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub text: String,
    pub date: String,
    pub likes: i64,
    pub image: Option<String>,
}

impl Comment {
    /// The server may transiently report a negative counter; it is never shown.
    #[inline]
    pub fn displayed_likes(&self) -> u64 {
        self.likes.max(0).unsigned_abs()
    }

    pub fn formatted_date(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.date)
            .map(|x| x.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|_| self.date.clone())
    }

    #[inline]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|x| !x.is_empty())
    }
}

/// Envelope returned by the list endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct CommentPage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Comment>,
}

/// Payload for creating a comment. Id and date are assigned by the server.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NewComment {
    pub author: String,
    pub text: String,
    pub likes: i64,
    pub image: Option<String>,
}

impl NewComment {
    pub fn new<A: ToString + ?Sized, T: ToString + ?Sized>(author: &A, text: &T) -> Self {
        Self {
            author: author.to_string(),
            text: text.to_string(),
            likes: 0,
            image: None,
        }
    }
}

/// Partial update; absent fields are left out of the request body.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct CommentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CommentPatch {
    #[inline]
    pub fn text<T: ToString + ?Sized>(text: &T) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(likes: i64, date: &str) -> Comment {
        Comment {
            id: 1,
            author: "Jane Doe".into(),
            text: "hello".into(),
            date: date.into(),
            likes,
            image: None,
        }
    }

    #[test]
    fn negative_likes_are_displayed_as_zero() {
        assert_eq!(comment(-3, "").displayed_likes(), 0);
        assert_eq!(comment(0, "").displayed_likes(), 0);
        assert_eq!(comment(7, "").displayed_likes(), 7);
    }

    #[test]
    fn formats_rfc3339_dates() {
        let c = comment(0, "2024-01-05T15:04:00Z");
        assert_eq!(c.formatted_date(), "Jan 5, 2024, 03:04 PM");
    }

    #[test]
    fn unparsable_date_falls_back_to_raw_value() {
        let c = comment(0, "yesterday");
        assert_eq!(c.formatted_date(), "yesterday");
    }

    #[test]
    fn empty_image_is_treated_as_missing() {
        let mut c = comment(0, "");
        c.image = Some(String::new());
        assert_eq!(c.image(), None);
        c.image = Some("https://example.com/a.png".into());
        assert_eq!(c.image(), Some("https://example.com/a.png"));
    }

    #[test]
    fn page_deserializes_with_null_cursors() {
        let page: CommentPage = serde_json::from_str(
            r#"{"count":1,"next":null,"previous":null,"results":[
                {"id":4,"author":"Admin","text":"hi","date":"2024-01-05T15:04:00Z","likes":2,"image":null}
            ]}"#,
        )
        .unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.next, None);
        assert_eq!(page.results[0].id, 4);
        assert_eq!(page.results[0].image, None);
    }

    #[test]
    fn patch_only_serializes_present_fields() {
        let body = serde_json::to_value(CommentPatch::text("edited")).unwrap();
        assert_eq!(body, serde_json::json!({ "text": "edited" }));
    }

    #[test]
    fn new_comment_starts_without_likes_or_image() {
        let body = serde_json::to_value(NewComment::new("Admin", "first")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "author": "Admin", "text": "first", "likes": 0, "image": null })
        );
    }
}
