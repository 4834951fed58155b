use serde::{Deserialize, Serialize};

/// Slide deck outline returned to the add-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub title: String,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub bullets: Vec<String>,
}

impl Slide {
    pub fn new<I, S>(title: impl Into<String>, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            bullets: bullets.into_iter().map(Into::into).collect(),
        }
    }
}

impl Outline {
    /// Build the fixed two-slide outline around an already sanitized topic.
    ///
    /// The topic is interpolated as-is; callers must redact it first.
    pub fn for_topic(safe_topic: &str) -> Self {
        Self {
            title: format!("Security-Enhanced Presentation: {}", safe_topic),
            slides: vec![
                Slide::new(
                    "Executive Summary",
                    [
                        "This presentation was generated via a Secure Backend.".to_string(),
                        "Sensitive data was redacted before processing.".to_string(),
                        format!("Topic: {}", safe_topic),
                    ],
                ),
                Slide::new(
                    "Key Insights",
                    [
                        "Point A: Secure Architecture",
                        "Point B: Rust + React Hybrid",
                        "Point C: Hackathon Winner",
                    ],
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_shape() {
        let outline = Outline::for_topic("Quarterly review");

        assert_eq!(outline.title, "Security-Enhanced Presentation: Quarterly review");
        assert_eq!(outline.slides.len(), 2);
        assert_eq!(outline.slides[0].title, "Executive Summary");
        assert_eq!(outline.slides[0].bullets[2], "Topic: Quarterly review");
        assert_eq!(outline.slides[1].title, "Key Insights");
        assert_eq!(outline.slides[1].bullets.len(), 3);
    }

    #[test]
    fn test_outline_json_fields() {
        let outline = Outline::for_topic("x");
        let json = serde_json::to_value(&outline).unwrap();

        assert!(json["title"].is_string());
        assert!(json["slides"].is_array());
        assert_eq!(json["slides"][0]["bullets"][0], outline.slides[0].bullets[0]);
        assert_eq!(json["slides"][1]["bullets"][2], "Point C: Hackathon Winner");
    }

    #[test]
    fn test_empty_topic() {
        let outline = Outline::for_topic("");

        assert_eq!(outline.title, "Security-Enhanced Presentation: ");
        assert_eq!(outline.slides[0].bullets[2], "Topic: ");
    }
}
