use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a catalog product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog product record.
///
/// Serialized field names match the stored `adminDashboardProducts` blob:
/// camelCase timestamps, ISO-8601 values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    pub name: String,

    pub description: String,

    /// Short labels, value-unique, insertion order preserved for display
    pub tags: Vec<String>,

    pub price: f64,

    /// Fixed at creation, immutable afterwards
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation; always >= `created_at`
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Editable fields of a product, as entered in the form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub price: f64,
}

impl Product {
    /// Create a new record from form values with a fresh id and
    /// `created_at == updated_at == now`.
    pub fn new(draft: ProductDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: ProductId::new_v4(),
            name: draft.name,
            description: draft.description,
            tags: dedup_tags(draft.tags),
            price: draft.price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge form values over the record. `id` and `created_at` are
    /// untouched, `updated_at` moves to `now`.
    pub fn apply(&mut self, draft: ProductDraft, now: DateTime<Utc>) {
        self.name = draft.name;
        self.description = draft.description;
        self.tags = dedup_tags(draft.tags);
        self.price = draft.price;
        self.updated_at = now;
    }

    /// Form values of this record, for prefilling the edit form
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            price: self.price,
        }
    }
}

/// Drop duplicate tags by value, keeping first-occurrence order.
pub fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

/// Union of existing and incoming tags, value-unique, insertion order kept.
/// Used when AI suggestions land on a form that already has tags.
pub fn merge_tags(existing: &[String], incoming: &[String]) -> Vec<String> {
    let mut out: Vec<String> = existing.to_vec();
    for tag in incoming {
        if !out.iter().any(|t| t == tag) {
            out.push(tag.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Desk Lamp".into(),
            description: "Adjustable LED desk lamp.".into(),
            tags: vec!["lighting".into(), "office".into()],
            price: 39.90,
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn new_sets_equal_timestamps_and_fresh_id() {
        let product = Product::new(draft(), at(0));
        assert!(!product.id.to_string().is_empty());
        assert_eq!(product.created_at, product.updated_at);
        assert_eq!(product.name, "Desk Lamp");
        assert_eq!(product.tags, vec!["lighting", "office"]);
    }

    #[test]
    fn apply_advances_updated_at_only() {
        let mut product = Product::new(draft(), at(0));
        let id = product.id;

        let mut changed = draft();
        changed.price = 44.90;
        product.apply(changed, at(60));

        assert_eq!(product.id, id);
        assert_eq!(product.created_at, at(0));
        assert_eq!(product.updated_at, at(60));
        assert!(product.updated_at > product.created_at);
        assert_eq!(product.price, 44.90);
        assert_eq!(product.name, "Desk Lamp");
    }

    #[test]
    fn duplicate_tags_collapse_keeping_order() {
        let mut d = draft();
        d.tags = vec!["a".into(), "b".into(), "a".into(), "c".into(), "b".into()];
        let product = Product::new(d, at(0));
        assert_eq!(product.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn merge_tags_unions_without_duplicates() {
        let existing = vec!["audio".to_string(), "wireless".to_string()];
        let incoming = vec![
            "wireless".to_string(),
            "travel".to_string(),
            "audio".to_string(),
        ];
        assert_eq!(
            merge_tags(&existing, &incoming),
            vec!["audio", "wireless", "travel"]
        );
    }

    #[test]
    fn serde_uses_camel_case_timestamps() {
        let product = Product::new(draft(), at(0));
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(!json.contains("\"created_at\""));

        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn product_id_parse_round_trip() {
        let id = ProductId::new_v4();
        assert_eq!(ProductId::parse(&id.to_string()).unwrap(), id);
        assert!(ProductId::parse("not-a-uuid").is_err());
    }
}
