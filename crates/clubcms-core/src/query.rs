//! Query descriptors and the bracket-notation query string encoder.
//!
//! The CMS parses deep-object query strings: nested objects become
//! bracketed key paths and arrays become indexed bracket segments, e.g.
//! `populate[Imagen][fields][0]=id`. [`encode`] produces that wire format
//! from any serializable value; [`Query`] is the descriptor the resource
//! services build their fixed request shapes with.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use url::form_urlencoded;

use crate::error::Error;

/// A page selection passed through to the CMS.
///
/// The defaults match what the site requests when a caller asks for
/// "the first page": page 1 with 25 items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Create a page request for the given page and page size.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 25,
        }
    }
}

/// Population rules for related and nested entities.
///
/// `All` is the CMS's `populate=*` wildcard; `Relations` selects specific
/// relations by name, each with its own [`Relation`] rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Populate {
    /// Do not populate any relations.
    #[default]
    None,
    /// Populate every first-level relation (`populate=*`).
    All,
    /// Populate the named relations with per-relation rules.
    Relations(BTreeMap<String, Relation>),
}

impl Populate {
    /// True if no population directive would be sent.
    pub fn is_none(&self) -> bool {
        matches!(self, Populate::None)
    }
}

impl Serialize for Populate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Populate::None => serializer.serialize_none(),
            Populate::All => serializer.serialize_str("*"),
            Populate::Relations(relations) => relations.serialize(serializer),
        }
    }
}

/// Population rule for a single relation.
///
/// `fields` restricts which attributes of the related entity are returned;
/// `populate` recurses one level deeper (the deep `populate=*` case). A
/// rule with neither serializes as `true`, the wire form for "include the
/// relation with all of its attributes".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relation {
    fields: Vec<String>,
    populate: Populate,
}

impl Serialize for Relation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        if self.fields.is_empty() && self.populate.is_none() {
            return serializer.serialize_bool(true);
        }

        let mut map = serializer.serialize_map(None)?;
        if !self.fields.is_empty() {
            map.serialize_entry("fields", &self.fields)?;
        }
        if !self.populate.is_none() {
            map.serialize_entry("populate", &self.populate)?;
        }
        map.end()
    }
}

impl Relation {
    /// A rule that returns the relation with all of its attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// A rule restricted to the given attribute names.
    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            populate: Populate::None,
        }
    }

    /// Recursively populate everything below this relation.
    pub fn populate_all(mut self) -> Self {
        self.populate = Populate::All;
        self
    }
}

/// A structured request descriptor, serialized into the query string.
///
/// Input-only: descriptors are built, encoded, and discarded per request.
///
/// # Example
///
/// ```
/// use clubcms_core::query::{PageRequest, Query, Relation};
///
/// let query = Query::new()
///     .sort("createdAt:desc")
///     .populate_relation("Imagen", Relation::with_fields(["id", "url", "formats"]))
///     .paginate(PageRequest::default());
/// let encoded = clubcms_core::query::encode(&query).unwrap();
/// assert!(encoded.contains("pagination%5Bpage%5D=1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Query {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sort: Vec<String>,
    #[serde(skip_serializing_if = "Populate::is_none")]
    populate: Populate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<PageRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<String>,
}

impl Query {
    /// Create an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sort term, e.g. `createdAt:asc`.
    pub fn sort(mut self, term: impl Into<String>) -> Self {
        self.sort.push(term.into());
        self
    }

    /// Populate every first-level relation.
    pub fn populate_all(mut self) -> Self {
        self.populate = Populate::All;
        self
    }

    /// Populate a named relation with the given rule.
    pub fn populate_relation(mut self, name: impl Into<String>, relation: Relation) -> Self {
        match &mut self.populate {
            Populate::Relations(relations) => {
                relations.insert(name.into(), relation);
            }
            _ => {
                let mut relations = BTreeMap::new();
                relations.insert(name.into(), relation);
                self.populate = Populate::Relations(relations);
            }
        }
        self
    }

    /// Restrict the top-level attributes returned by the CMS.
    pub fn select(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Set the page selection.
    pub fn paginate(mut self, page: PageRequest) -> Self {
        self.pagination = Some(page);
        self
    }

    /// True if the descriptor would encode to an empty query string.
    pub fn is_empty(&self) -> bool {
        self.sort.is_empty()
            && self.populate.is_none()
            && self.pagination.is_none()
            && self.fields.is_empty()
    }
}

/// Encode a serializable value into a bracket-notation query string.
///
/// Objects nest as `parent[child]`, arrays as indexed `parent[0]` segments,
/// and every pair is percent-encoded. `null` values are skipped. An empty
/// value encodes to the empty string.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized to JSON.
pub fn encode<T: Serialize>(query: &T) -> Result<String, Error> {
    let value = serde_json::to_value(query).map_err(|e| Error::Query {
        message: e.to_string(),
    })?;

    let mut pairs = Vec::new();
    collect_pairs(String::new(), &value, &mut pairs);
    if pairs.is_empty() {
        return Ok(String::new());
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    Ok(serializer.finish())
}

fn collect_pairs(prefix: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        // A bare scalar at the top level has no key to hang off of
        Value::Bool(_) | Value::Number(_) | Value::String(_) if prefix.is_empty() => {}
        Value::Bool(b) => pairs.push((prefix, b.to_string())),
        Value::Number(n) => pairs.push((prefix, n.to_string())),
        Value::String(s) => pairs.push((prefix, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                collect_pairs(bracketed(&prefix, &index.to_string()), item, pairs);
            }
        }
        Value::Object(entries) => {
            for (key, item) in entries {
                collect_pairs(bracketed(&prefix, key), item, pairs);
            }
        }
    }
}

fn bracketed(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}[{segment}]")
    }
}
