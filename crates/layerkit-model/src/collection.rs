//! Collection queries: select, filter, sort and limit items of external data.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::condition::{Condition, all_hold, compare_values};
use crate::key_path::KeyPath;
use crate::resolve::ResolutionContext;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortDescriptor {
    pub key_path: String,
    pub ascending: bool,
}

impl SortDescriptor {
    pub fn ascending(key_path: impl Into<String>) -> Self {
        Self {
            key_path: key_path.into(),
            ascending: true,
        }
    }

    pub fn descending(key_path: impl Into<String>) -> Self {
        Self {
            key_path: key_path.into(),
            ascending: false,
        }
    }
}

/// Window over the filtered, sorted items. `start_at` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limit {
    pub show: usize,
    pub start_at: usize,
}

impl Default for Limit {
    fn default() -> Self {
        Self {
            show: 1,
            start_at: 1,
        }
    }
}

/// A query over an array in the external data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectionQuery<'q> {
    pub key_path: &'q str,
    pub filters: &'q [Condition],
    pub sort_descriptors: &'q [SortDescriptor],
    pub limit: Option<Limit>,
}

impl CollectionQuery<'_> {
    /// Run the query against the data in `context`.
    ///
    /// Anything that does not navigate to an array yields no items. Each
    /// filter is evaluated with the item as data and the context's property
    /// values still in scope.
    pub fn items<'a>(&self, context: &ResolutionContext<'a>) -> Vec<&'a serde_json::Value> {
        let Some(data) = context.data else {
            return Vec::new();
        };
        let Ok(path) = KeyPath::parse(self.key_path) else {
            tracing::trace!(key_path = self.key_path, "collection key path is malformed");
            return Vec::new();
        };
        let Some(serde_json::Value::Array(items)) = path.evaluate(data) else {
            return Vec::new();
        };

        let mut selected: Vec<&'a serde_json::Value> = items
            .iter()
            .filter(|item| {
                let scoped = ResolutionContext {
                    property_values: context.property_values,
                    data: Some(*item),
                };
                all_hold(self.filters, &scoped)
            })
            .collect();

        if !self.sort_descriptors.is_empty() {
            let sort_paths: Vec<(Option<KeyPath>, bool)> = self
                .sort_descriptors
                .iter()
                .map(|descriptor| (KeyPath::parse(&descriptor.key_path).ok(), descriptor.ascending))
                .collect();
            selected.sort_by(|a, b| compare_items(a, b, &sort_paths));
        }

        match self.limit {
            Some(limit) => selected
                .into_iter()
                .skip(limit.start_at.saturating_sub(1))
                .take(limit.show)
                .collect(),
            None => selected,
        }
    }
}

fn sort_key(item: &serde_json::Value, path: Option<&KeyPath>) -> Option<Value> {
    path?.evaluate(item).and_then(Value::from_json)
}

fn compare_items(
    a: &serde_json::Value,
    b: &serde_json::Value,
    sort_paths: &[(Option<KeyPath>, bool)],
) -> Ordering {
    for (path, ascending) in sort_paths {
        let ordering = match (sort_key(a, path.as_ref()), sort_key(b, path.as_ref())) {
            // Missing keys sort last regardless of direction.
            (None, None) => Ordering::Equal,
            (None, Some(_)) => return Ordering::Greater,
            (Some(_), None) => return Ordering::Less,
            (Some(left), Some(right)) => {
                let ordering = compare_values(&left, &right).unwrap_or(Ordering::Equal);
                if *ascending { ordering } else { ordering.reverse() }
            }
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
