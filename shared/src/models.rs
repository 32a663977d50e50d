use serde::{Deserialize, Serialize};
use stocksim_rs::data::{PricePoint, SimState};

/// Legacy public history document that wrapped the points and carried the
/// private simulation state under `meta`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyHistoryDocument {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub history: Vec<PricePoint>,
    #[serde(default)]
    pub meta: Option<SimState>,
}

/// Any accepted shape of the public history file
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HistoryFile {
    Points(Vec<PricePoint>),
    Legacy(LegacyHistoryDocument),
}

impl HistoryFile {
    pub fn is_legacy(&self) -> bool {
        matches!(self, HistoryFile::Legacy(_))
    }

    /// Split into the points and any embedded state
    pub fn into_parts(self) -> (Vec<PricePoint>, Option<SimState>) {
        match self {
            HistoryFile::Points(points) => (points, None),
            HistoryFile::Legacy(doc) => (doc.history, doc.meta),
        }
    }
}

/// Store item as returned by the items listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreItem {
    /// Snowflake, sent either as a string or a number
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl StoreItem {
    /// Id as text, `None` when the listing omitted it
    pub fn id_string(&self) -> Option<String> {
        match &self.id {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Items listing, either a bare array or wrapped in `{"items": [...]}`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemsPayload {
    List(Vec<StoreItem>),
    Wrapped { items: Vec<StoreItem> },
}

impl ItemsPayload {
    pub fn into_items(self) -> Vec<StoreItem> {
        match self {
            ItemsPayload::List(items) | ItemsPayload::Wrapped { items } => items,
        }
    }
}

/// Body of the store item PATCH
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub price: i64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_file_accepts_array() {
        let file: HistoryFile =
            serde_json::from_str(r#"[{"date": "2025-01-01", "price": 1000}]"#).unwrap();
        assert!(!file.is_legacy());
        let (points, meta) = file.into_parts();
        assert_eq!(points.len(), 1);
        assert!(meta.is_none());
    }

    #[test]
    fn test_history_file_accepts_legacy_document() {
        let json = r#"{
            "symbol": "TSLA",
            "name": "Tesla Stock",
            "unit": "chips",
            "history": [{"date": "2025-01-01", "price": 1000}, {"date": "2025-01-02", "price": 990}],
            "meta": {"next_shock_in": 2, "bear_left": 1}
        }"#;
        let file = serde_json::from_str::<HistoryFile>(json).unwrap();
        assert!(file.is_legacy());
        let (points, meta) = file.into_parts();
        assert_eq!(points.len(), 2);
        assert_eq!(meta, Some(SimState { next_shock_in: Some(2), bear_left: 1 }));
    }

    #[test]
    fn test_items_payload_shapes() {
        let list: ItemsPayload = serde_json::from_str(r#"[{"id": 42, "name": "Tesla Stock"}]"#).unwrap();
        let items = list.into_items();
        assert_eq!(items[0].id_string().as_deref(), Some("42"));

        let wrapped: ItemsPayload =
            serde_json::from_str(r#"{"items": [{"id": "77", "name": "Gold"}], "page": 1}"#).unwrap();
        assert_eq!(wrapped.into_items()[0].id_string().as_deref(), Some("77"));
    }

    #[test]
    fn test_item_without_id_still_decodes() {
        let list: ItemsPayload = serde_json::from_str(
            r#"[{"name": "Broken"}, {"id": null, "name": "Null"}, {"id": "5", "name": "Ok"}]"#,
        )
        .unwrap();
        let ids: Vec<Option<String>> = list.into_items().iter().map(StoreItem::id_string).collect();
        assert_eq!(ids, vec![None, None, Some("5".to_string())]);
    }
}
