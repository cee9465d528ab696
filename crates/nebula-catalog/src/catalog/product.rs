//! Product and reason types.

use crate::ids::ProductId;
use crate::rating::{grade_score, Grade, ScoreBand};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity of a rating reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Counts in the product's favour.
    Positive,
    /// Counts against the product.
    Negative,
    /// Neither, but worth a warning.
    Caution,
}

impl Polarity {
    /// Marker prefixed to the annotated string form.
    pub fn marker(&self) -> &'static str {
        match self {
            Polarity::Positive => "✅",
            Polarity::Negative => "❌",
            Polarity::Caution => "⚠️",
        }
    }
}

/// One annotated explanation behind a product's rating.
///
/// Stored in the dataset as `"<marker> <text>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Reason {
    pub polarity: Polarity,
    pub text: String,
}

impl Reason {
    pub fn new(polarity: Polarity, text: impl Into<String>) -> Self {
        Self {
            polarity,
            text: text.into(),
        }
    }

    pub fn positive(text: impl Into<String>) -> Self {
        Self::new(Polarity::Positive, text)
    }

    pub fn negative(text: impl Into<String>) -> Self {
        Self::new(Polarity::Negative, text)
    }

    pub fn caution(text: impl Into<String>) -> Self {
        Self::new(Polarity::Caution, text)
    }

    /// Parse the annotated form.
    ///
    /// Unmarked strings are treated as cautions and keep their whole text.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(rest) = raw.strip_prefix("✅") {
            return Self::positive(rest.trim());
        }
        if let Some(rest) = raw.strip_prefix("❌") {
            return Self::negative(rest.trim());
        }
        // The variation selector is optional.
        if let Some(rest) = raw.strip_prefix("⚠️").or_else(|| raw.strip_prefix('⚠')) {
            return Self::caution(rest.trim());
        }
        Self::caution(raw)
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.polarity.marker(), self.text)
    }
}

impl From<String> for Reason {
    fn from(s: String) -> Self {
        Reason::parse(&s)
    }
}

impl From<&str> for Reason {
    fn from(s: &str) -> Self {
        Reason::parse(s)
    }
}

impl From<Reason> for String {
    fn from(r: Reason) -> Self {
        r.to_string()
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Barcode (unique), matched against scanner output.
    pub barcode: String,
    /// Product name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Kind of product; recommendations stay within it.
    pub category: String,
    /// Environmental rating, if graded.
    #[serde(default)]
    pub rating: Option<Grade>,
    /// Image reference, passed through untouched.
    #[serde(default)]
    pub image_url: String,
    /// Reasons behind the rating, in display order.
    #[serde(default)]
    pub reasons: Vec<Reason>,
}

impl Product {
    /// Create an unrated product with no reasons.
    pub fn new(
        id: impl Into<ProductId>,
        barcode: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            barcode: barcode.into(),
            name: name.into(),
            brand: brand.into(),
            category: category.into(),
            rating: None,
            image_url: String::new(),
            reasons: Vec::new(),
        }
    }

    pub fn with_rating(mut self, grade: Grade) -> Self {
        self.rating = Some(grade);
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    pub fn with_reason(mut self, reason: impl Into<Reason>) -> Self {
        self.reasons.push(reason.into());
        self
    }

    /// Numeric score of the rating (0 when unrated).
    pub fn score(&self) -> f64 {
        grade_score(self.rating)
    }

    /// Badge band of the rating.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::of(self.rating)
    }

    /// Case-insensitive match of an already lowercased term on name or brand.
    pub(crate) fn matches_lowercase(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term) || self.brand.to_lowercase().contains(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new(1, "8710000000001", "Melk", "Acme", "zuivel")
            .with_rating(Grade::A)
            .with_reason("✅ Biologisch");
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.score(), 5.0);
        assert_eq!(product.band(), ScoreBand::A);
        assert_eq!(product.reasons[0].polarity, Polarity::Positive);
    }

    #[test]
    fn test_reason_markers() {
        assert_eq!(Reason::parse("✅ Fairtrade"), Reason::positive("Fairtrade"));
        assert_eq!(Reason::parse("❌  Palmolie "), Reason::negative("Palmolie"));
        assert_eq!(Reason::parse("⚠️ Veel suiker"), Reason::caution("Veel suiker"));
        assert_eq!(Reason::parse("⚠ Veel zout"), Reason::caution("Veel zout"));
        assert_eq!(Reason::parse("Geen label"), Reason::caution("Geen label"));
    }

    #[test]
    fn test_reason_string_form() {
        let reason = Reason::negative("Plastic verpakking");
        assert_eq!(reason.to_string(), "❌ Plastic verpakking");
        assert_eq!(Reason::parse(&reason.to_string()), reason);
    }

    #[test]
    fn test_product_json_shape() {
        let json = r#"{
            "id": 4,
            "barcode": "123",
            "name": "Cola",
            "brand": "Fizz",
            "category": "frisdrank",
            "rating": "D-",
            "imageUrl": "https://img/cola.png",
            "reasons": ["❌ Veel suiker", "✅ Recyclebaar blik"]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.rating, Some(Grade::DMinus));
        assert_eq!(product.image_url, "https://img/cola.png");
        assert_eq!(product.reasons.len(), 2);
        assert_eq!(product.reasons[1].text, "Recyclebaar blik");

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["reasons"][0], "❌ Veel suiker");
        assert_eq!(back["imageUrl"], "https://img/cola.png");
    }

    #[test]
    fn test_product_without_rating() {
        let json = r#"{"id": 9, "barcode": "9", "name": "Water", "brand": "Bron", "category": "water"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.rating, None);
        assert_eq!(product.score(), 0.0);
        assert!(product.reasons.is_empty());
    }

    #[test]
    fn test_product_rejects_invalid_grade() {
        let json = r#"{"id": 9, "barcode": "9", "name": "W", "brand": "B", "category": "c", "rating": "F"}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }
}
