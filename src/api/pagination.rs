//! Pagination utilities for list endpoints

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Optional list query. Nothing here is defaulted client-side; absent fields
/// are simply not sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(field.into());
        self.sort_order = Some(order);
        self
    }

    /// Page number (1-indexed, minimum 1)
    pub fn page_number(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Number of items skipped before the requested page, given a page size.
    pub fn offset(&self, limit: u32) -> usize {
        (self.page_number() as usize - 1) * limit as usize
    }
}

/// Paginated envelope: `{ data, total, page, limit }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> Paginated<T> {
    /// Cut one page out of an already filtered and ordered collection.
    pub fn slice(items: Vec<T>, params: &ListParams, limit: u32) -> Self {
        let total = items.len() as u64;
        let data = items
            .into_iter()
            .skip(params.offset(limit))
            .take(limit as usize)
            .collect();

        Self {
            data,
            total,
            page: params.page_number(),
            limit,
        }
    }
}

/// A list endpoint may answer with a bare array or a paginated envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Sequence(Vec<T>),
    Page(Paginated<T>),
}

impl<T> ListResponse<T> {
    /// The entities, whichever shape the server chose.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Sequence(items) => items,
            Self::Page(page) => page.data,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Page(page) => page.data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::bare_array(json!([{ "id": "1" }, { "id": "2" }]))]
    #[case::envelope(json!({ "data": [{ "id": "1" }, { "id": "2" }], "total": 7, "page": 1, "limit": 2 }))]
    fn both_list_shapes_normalize_to_items(#[case] body: serde_json::Value) {
        let response: ListResponse<serde_json::Value> = serde_json::from_value(body).unwrap();

        let ids: Vec<_> = response
            .into_items()
            .into_iter()
            .map(|item| item["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn envelope_is_recognised_as_page() {
        let response: ListResponse<u32> =
            serde_json::from_value(json!({ "data": [1], "total": 1, "page": 3, "limit": 10 })).unwrap();

        assert!(matches!(response, ListResponse::Page(Paginated { page: 3, limit: 10, .. })));
    }

    #[test]
    fn params_serialize_camel_case_without_absent_fields() {
        let params = ListParams::new().page(2).sort("dataCriacao", SortOrder::Desc);

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "page": 2, "sortBy": "dataCriacao", "sortOrder": "desc" })
        );
    }

    #[rstest]
    #[case(None, 0)]
    #[case(Some(0), 0)]
    #[case(Some(1), 0)]
    #[case(Some(3), 20)]
    fn offset_is_page_based(#[case] page: Option<u32>, #[case] expected: usize) {
        let params = ListParams { page, ..ListParams::default() };
        assert_eq!(params.offset(10), expected);
    }

    #[test]
    fn slice_never_exceeds_limit() {
        let page = Paginated::slice((1..=7).collect(), &ListParams::new().page(2), 3);

        assert_eq!(page.data, vec![4, 5, 6]);
        assert_eq!(page.total, 7);
        assert_eq!(page.page, 2);
        assert!(page.data.len() <= page.limit as usize);
    }
}
