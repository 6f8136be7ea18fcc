//! Shared list envelopes, filters and query rendering

use serde::{Deserialize, Deserializer, Serialize};

use crate::impl_domain_status_conversions;

/// Query string pairs in send order. Array filters appear as repeated keys.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Render a parameter struct into query pairs.
pub trait ToQuery {
    fn to_query(&self) -> QueryPairs;
}

pub(crate) fn push_opt<V: ToString>(pairs: &mut QueryPairs, key: &'static str, value: Option<&V>) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}

pub(crate) fn push_all<V: ToString>(pairs: &mut QueryPairs, key: &'static str, values: &[V]) {
    pairs.extend(values.iter().map(|value| (key, value.to_string())));
}

/// Read an explicit JSON `null` as the type's default.
///
/// `#[serde(default)]` only covers absent fields; the backend sends empty
/// slices and maps as `null`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl_domain_status_conversions!(SortOrder {
    Asc => "asc",
    Desc => "desc",
});

/// Lifecycle status shared by catalog entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    Published,
    Archived,
    Deleted,
}

impl_domain_status_conversions!(EntityStatus {
    Published => "published",
    Archived => "archived",
    Deleted => "deleted",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

/// Paged list envelope returned by every list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub items: Vec<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self { items: Vec::new(), pagination: Pagination::default() }
    }
}

/// Filters accepted by every list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub status: Option<EntityStatus>,
    pub order: Option<SortOrder>,
    pub sort: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub expand: Option<String>,
}

impl ListParams {
    pub fn page(limit: u32, offset: u32) -> Self {
        Self { limit: Some(limit), offset: Some(offset), ..Self::default() }
    }
}

impl ToQuery for ListParams {
    fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "limit", self.limit.as_ref());
        push_opt(&mut pairs, "offset", self.offset.as_ref());
        push_opt(&mut pairs, "status", self.status.as_ref());
        push_opt(&mut pairs, "order", self.order.as_ref());
        push_opt(&mut pairs, "sort", self.sort.as_ref());
        push_opt(&mut pairs, "start_time", self.start_time.as_ref());
        push_opt(&mut pairs, "end_time", self.end_time.as_ref());
        push_opt(&mut pairs, "expand", self.expand.as_ref());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_render_nothing() {
        assert!(ListParams::default().to_query().is_empty());
    }

    #[test]
    fn renders_only_set_filters_in_order() {
        let params = ListParams {
            status: Some(EntityStatus::Published),
            order: Some(SortOrder::Desc),
            ..ListParams::page(20, 40)
        };
        assert_eq!(
            params.to_query(),
            vec![
                ("limit", "20".to_string()),
                ("offset", "40".to_string()),
                ("status", "published".to_string()),
                ("order", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn list_response_tolerates_missing_fields() {
        let parsed: ListResponse<String> = serde_json::from_str("{}").unwrap();
        assert!(parsed.items.is_empty());
        assert_eq!(parsed.pagination.total, 0);

        let parsed: ListResponse<String> = serde_json::from_str(
            r#"{"items":["a","b"],"pagination":{"total":2,"limit":10,"offset":0}}"#,
        )
        .unwrap();
        assert_eq!(parsed.items, vec!["a", "b"]);
        assert_eq!(parsed.pagination.limit, 10);
    }

    #[test]
    fn list_response_accepts_null_items() {
        let parsed: ListResponse<String> =
            serde_json::from_str(r#"{"items":null,"pagination":null}"#).unwrap();
        assert!(parsed.items.is_empty());
        assert_eq!(parsed.pagination, Pagination::default());
    }
}
