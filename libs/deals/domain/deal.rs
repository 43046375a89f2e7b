use serde::{Deserialize, Serialize};

/// Image shown when a deal document carries no image of its own.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// A deal document as written by the upstream ingester.
///
/// The view never writes these; every field is taken as-is. Pricing fields
/// are optional because the ingester cannot always extract them, and the
/// view degrades to placeholders instead of rejecting the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    #[serde(default)]
    pub title: String,
    pub current_price: Option<f64>,
    pub original_price: Option<f64>,
    pub discount_percent: Option<f64>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub affiliate_url: String,
    /// Ordering key, ISO 8601. Newest first in every snapshot.
    #[serde(default)]
    pub timestamp: String,
}

impl Deal {
    /// Image URL to display, falling back to the placeholder.
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE_URL)
    }

    /// Whether the discount badge should be shown.
    pub fn has_discount(&self) -> bool {
        self.discount_percent.map_or(false, |p| p > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let deal: Deal = serde_json::from_str(r#"{"title":"USB hub"}"#).unwrap();
        assert_eq!(deal.title, "USB hub");
        assert_eq!(deal.current_price, None);
        assert_eq!(deal.original_price, None);
        assert_eq!(deal.source, "");
        assert_eq!(deal.image_or_placeholder(), PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn test_full_document_roundtrip() {
        let deal: Deal = serde_json::from_str(
            r#"{
                "title": "Mechanical keyboard",
                "current_price": 59.99,
                "original_price": 89.99,
                "discount_percent": 33,
                "image_url": "https://img.example/kb.jpg",
                "source": "Amazon",
                "affiliate_url": "https://amazon.com/dp/B0?tag=t",
                "timestamp": "2025-06-01T12:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(deal.current_price, Some(59.99));
        assert_eq!(deal.image_or_placeholder(), "https://img.example/kb.jpg");
        assert!(deal.has_discount());
    }

    #[test]
    fn test_zero_discount_is_not_a_discount() {
        let deal = Deal {
            discount_percent: Some(0.0),
            ..Deal::default()
        };
        assert!(!deal.has_discount());

        let no_field = Deal::default();
        assert!(!no_field.has_discount());
    }
}
