//! Response envelope normalization.
//!
//! Single-entity endpoints answer either `{ "data": T, "message": .., "status": .. }`
//! or a bare `T`; list endpoints answer
//! `{ "data": [T], "pageResponse": { currentPage, totalPages, totalElements } }`,
//! sometimes without `pageResponse` and sometimes as a bare array.
//! Everything is decoded here so callers only ever see `T` or `Page<T>`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pagination block of a list response. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageResponse {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl Default for PageResponse {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_elements: 0,
        }
    }
}

impl PageResponse {
    /// A single page holding `count` elements.
    pub fn single(count: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_elements: count as u64,
        }
    }

    /// Backend sends `totalPages: 0` for an empty result; the UI always has
    /// at least one page to show.
    fn normalized(self, item_count: usize) -> Self {
        let total_pages = self.total_pages.max(1);
        Self {
            current_page: self.current_page.clamp(1, total_pages),
            total_pages,
            total_elements: if self.total_elements == 0 {
                item_count as u64
            } else {
                self.total_elements
            },
        }
    }
}

/// Query of the list endpoints that take nothing but a page number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page_no: u32,
}

/// One page of records, already unwrapped from the envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub info: PageResponse,
}

impl<T> Page<T> {
    pub fn single(items: Vec<T>) -> Self {
        let info = PageResponse::single(items.len());
        Self { items, info }
    }
}

/// Decode a single-entity response, wrapped or bare.
pub fn decode_data<T: DeserializeOwned>(body: &str) -> Result<T, String> {
    let value: Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
    let payload = match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    serde_json::from_value(payload).map_err(|e| e.to_string())
}

/// Decode a list response into a page, wrapped or bare.
pub fn decode_page<T: DeserializeOwned>(body: &str) -> Result<Page<T>, String> {
    let value: Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
    match value {
        Value::Array(_) => {
            let items: Vec<T> = serde_json::from_value(value).map_err(|e| e.to_string())?;
            Ok(Page::single(items))
        }
        Value::Object(mut map) => {
            let items: Vec<T> = match map.remove("data") {
                None | Some(Value::Null) => Vec::new(),
                Some(data) => serde_json::from_value(data).map_err(|e| e.to_string())?,
            };
            let info = match map.remove("pageResponse") {
                None | Some(Value::Null) => PageResponse::single(items.len()),
                Some(raw) => serde_json::from_value::<PageResponse>(raw)
                    .map_err(|e| e.to_string())?
                    .normalized(items.len()),
            };
            Ok(Page { items, info })
        }
        Value::Null => Ok(Page::single(Vec::new())),
        other => Err(format!("unexpected list payload: {}", other)),
    }
}

/// Decode a list response and drop the pagination block.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, String> {
    decode_page(body).map(|page| page.items)
}

/// `message` field of a response body, if the backend sent one.
pub fn backend_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: String,
    }

    #[test]
    fn unwraps_data_field() {
        let row: Row = decode_data(r#"{"status":"OK","message":"done","data":{"id":"c1"}}"#).unwrap();
        assert_eq!(row, Row { id: "c1".into() });
    }

    #[test]
    fn accepts_bare_payload() {
        let row: Row = decode_data(r#"{"id":"c2"}"#).unwrap();
        assert_eq!(row.id, "c2");
    }

    #[test]
    fn null_data_decodes_into_option() {
        let row: Option<Row> = decode_data(r#"{"data":null}"#).unwrap();
        assert!(row.is_none());
    }

    #[test]
    fn decodes_paged_envelope() {
        let body = r#"{
            "data": [{"id":"c1"}],
            "pageResponse": {"currentPage":1,"totalPages":3,"totalElements":25}
        }"#;
        let page: Page<Row> = decode_page(body).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.info.total_pages, 3);
        assert_eq!(page.info.total_elements, 25);
    }

    #[test]
    fn empty_result_still_has_one_page() {
        let body = r#"{"data":[],"pageResponse":{"currentPage":0,"totalPages":0,"totalElements":0}}"#;
        let page: Page<Row> = decode_page(body).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.info.total_pages, 1);
        assert_eq!(page.info.current_page, 1);
    }

    #[test]
    fn bare_array_and_missing_page_block_become_single_page() {
        let bare: Page<Row> = decode_page(r#"[{"id":"a"},{"id":"b"}]"#).unwrap();
        assert_eq!(bare.info, PageResponse::single(2));

        let wrapped: Page<Row> = decode_page(r#"{"data":[{"id":"a"}]}"#).unwrap();
        assert_eq!(wrapped.info, PageResponse::single(1));
    }

    #[test]
    fn list_drops_the_page_block() {
        let rows: Vec<Row> = decode_list(
            r#"{"data":[{"id":"a"},{"id":"b"}],"pageResponse":{"currentPage":2,"totalPages":5,"totalElements":42}}"#,
        )
        .unwrap();
        assert_eq!(rows, vec![Row { id: "a".into() }, Row { id: "b".into() }]);

        let bare: Vec<Row> = decode_list(r#"[{"id":"c"}]"#).unwrap();
        assert_eq!(bare.len(), 1);
        assert!(decode_list::<Row>(r#"{"data":"nope"}"#).is_err());
    }

    #[test]
    fn extracts_backend_message() {
        assert_eq!(
            backend_message(r#"{"message":"Remark too short"}"#).as_deref(),
            Some("Remark too short")
        );
        assert_eq!(backend_message(r#"{"message":"  "}"#), None);
        assert_eq!(backend_message("not json"), None);
    }
}
