//! Response envelope types.
//!
//! Every CMS response wraps its payload in `{ data, meta }`. Single-record
//! responses carry empty (or absent) meta; list responses always carry
//! pagination. The two envelope types encode that distinction so a list
//! consumer never has to check whether pagination is there.

use serde::{Deserialize, Serialize};

/// Pagination state reported by the CMS on list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u64,
}

/// Metadata on a single-record envelope.
///
/// By-documentId fetches omit meta entirely; it defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Envelope for a single-record response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub meta: Meta,
}

/// Metadata on a list envelope. Pagination is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListMeta {
    pub pagination: Pagination,
}

/// Envelope for a list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
    pub meta: ListMeta,
}

impl<T> ListEnvelope<T> {
    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if this page carries no records.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the records on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// True if pages exist beyond this one.
    pub fn has_more(&self) -> bool {
        self.meta.pagination.page < self.meta.pagination.page_count
    }
}

impl<'a, T> IntoIterator for &'a ListEnvelope<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
