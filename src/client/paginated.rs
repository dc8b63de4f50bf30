//! Page-token pagination for list endpoints.
//!
//! A list endpoint may return a top-level `nextPageToken`. While it is
//! non-empty the same request is repeated with the token as a query
//! parameter, and the array-valued fields of each page are appended onto the
//! ones already collected.

use serde_json::{Map, Value};

use crate::{Error, Result};

/// Name of the pagination cursor, both in response bodies and in queries.
pub const NEXT_PAGE_TOKEN: &str = "nextPageToken";

/// Remove the page token from a decoded page.
///
/// Returns `Ok(None)` when the token is absent, `null` or empty, which marks
/// the last page.
pub fn take_page_token(page: &mut Map<String, Value>) -> Result<Option<String>> {
    match page.remove(NEXT_PAGE_TOKEN) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(token)) if token.is_empty() => Ok(None),
        Some(Value::String(token)) => Ok(Some(token)),
        Some(other) => Err(Error::UnexpectedShape(format!(
            "{} must be a string, got {}",
            NEXT_PAGE_TOKEN, other
        ))),
    }
}

/// Accumulates the pages of one paginated read.
///
/// The first page fixes the key set. Every later page may only carry keys
/// the first page had, and both sides of each merged key must be arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct PageAccumulator {
    merged: Map<String, Value>,
    pages: usize,
}

impl PageAccumulator {
    /// Start accumulating from the first page (token already removed).
    pub fn new(first: Map<String, Value>) -> Self {
        Self {
            merged: first,
            pages: 1,
        }
    }

    /// Append a follow-up page (token already removed).
    ///
    /// On error the accumulator may hold a partially merged page and must be
    /// discarded.
    pub fn push(&mut self, page: Map<String, Value>) -> Result<()> {
        for (key, value) in page {
            let target = self.merged.get_mut(&key).ok_or_else(|| Error::PageMerge {
                key: key.clone(),
                reason: "key was not present on the first page".to_string(),
            })?;

            match (target, value) {
                (Value::Array(items), Value::Array(more)) => items.extend(more),
                (Value::Array(_), other) => {
                    return Err(Error::PageMerge {
                        key,
                        reason: format!("expected an array, got {}", json_type(&other)),
                    });
                }
                (existing, _) => {
                    return Err(Error::PageMerge {
                        reason: format!("cannot append onto {}", json_type(existing)),
                        key,
                    });
                }
            }
        }

        self.pages += 1;
        Ok(())
    }

    /// Number of pages merged so far.
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// The merged mapping.
    pub fn into_inner(self) -> Map<String, Value> {
        self.merged
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_take_page_token() {
        let mut page = object(json!({"units": [], "nextPageToken": "abc"}));
        assert_eq!(take_page_token(&mut page).unwrap(), Some("abc".to_string()));
        assert!(!page.contains_key(NEXT_PAGE_TOKEN));

        let mut last = object(json!({"units": [], "nextPageToken": ""}));
        assert_eq!(take_page_token(&mut last).unwrap(), None);
        assert!(!last.contains_key(NEXT_PAGE_TOKEN));

        let mut null = object(json!({"nextPageToken": null}));
        assert_eq!(take_page_token(&mut null).unwrap(), None);

        let mut absent = object(json!({"units": []}));
        assert_eq!(take_page_token(&mut absent).unwrap(), None);
    }

    #[test]
    fn test_take_page_token_rejects_non_string() {
        let mut page = object(json!({"nextPageToken": 7}));
        assert!(matches!(
            take_page_token(&mut page),
            Err(Error::UnexpectedShape(_))
        ));
    }

    #[test]
    fn test_merge_in_page_order() {
        let mut acc = PageAccumulator::new(object(json!({"units": ["a", "b"]})));
        acc.push(object(json!({"units": ["c"]}))).unwrap();
        acc.push(object(json!({"units": ["d", "e"]}))).unwrap();

        assert_eq!(acc.pages(), 3);
        assert_eq!(
            Value::Object(acc.into_inner()),
            json!({"units": ["a", "b", "c", "d", "e"]})
        );
    }

    #[test]
    fn test_later_page_may_omit_keys() {
        let mut acc = PageAccumulator::new(object(json!({"units": ["a"], "extra": [1]})));
        acc.push(object(json!({"units": ["b"]}))).unwrap();
        assert_eq!(
            Value::Object(acc.into_inner()),
            json!({"units": ["a", "b"], "extra": [1]})
        );
    }

    #[test]
    fn test_new_key_fails() {
        let mut acc = PageAccumulator::new(object(json!({"units": ["a"]})));
        let err = acc.push(object(json!({"machines": ["m"]}))).unwrap_err();
        match err {
            Error::PageMerge { key, .. } => assert_eq!(key, "machines"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_array_fails() {
        let mut acc = PageAccumulator::new(object(json!({"units": ["a"], "count": 1})));
        assert!(matches!(
            acc.push(object(json!({"units": "b"}))),
            Err(Error::PageMerge { .. })
        ));
        assert!(matches!(
            acc.push(object(json!({"count": [2]}))),
            Err(Error::PageMerge { .. })
        ));
    }
}
