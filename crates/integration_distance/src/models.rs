//! Distance query and result models
//!
//! The success payload is kept as the service returned it. Accessors only
//! read the well-known Distance Matrix fields (`origin_addresses`,
//! `destination_addresses`, `rows[].elements[]`) and never rewrite them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered, non-normalized list of destinations for one query
///
/// A single destination string converts into a one-element list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Destinations(Vec<String>);

impl Destinations {
    /// Number of destinations
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no destinations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Destinations in query order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Split into consecutive batches of at most `batch_size` destinations
    ///
    /// A `batch_size` of zero is treated as one.
    pub fn batches(&self, batch_size: usize) -> impl Iterator<Item = &[String]> {
        self.0.chunks(batch_size.max(1))
    }
}

impl From<&str> for Destinations {
    fn from(destination: &str) -> Self {
        Self(vec![destination.to_string()])
    }
}

impl From<String> for Destinations {
    fn from(destination: String) -> Self {
        Self(vec![destination])
    }
}

impl From<Vec<String>> for Destinations {
    fn from(destinations: Vec<String>) -> Self {
        Self(destinations)
    }
}

impl From<Vec<&str>> for Destinations {
    fn from(destinations: Vec<&str>) -> Self {
        Self(destinations.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Destinations {
    fn from(destinations: &[&str]) -> Self {
        Self(destinations.iter().map(|d| (*d).to_string()).collect())
    }
}

impl From<&[String]> for Destinations {
    fn from(destinations: &[String]) -> Self {
        Self(destinations.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Destinations {
    fn from(destinations: [&str; N]) -> Self {
        Self(destinations.iter().map(|d| (*d).to_string()).collect())
    }
}

impl FromIterator<String> for Destinations {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Successful Distance Matrix payload
///
/// Holds the decoded JSON object unmodified (for a single batch) or the
/// batches merged under the single origin (for several).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceResult(Value);

impl DistanceResult {
    /// Wrap a decoded payload
    #[must_use]
    pub const fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// The payload as decoded JSON
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the result and return the payload
    #[must_use]
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Top-level `status` field
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    /// Addresses the service resolved the origins to
    #[must_use]
    pub fn origin_addresses(&self) -> Vec<&str> {
        string_array(&self.0, "origin_addresses")
    }

    /// Addresses the service resolved the destinations to, in query order
    #[must_use]
    pub fn destination_addresses(&self) -> Vec<&str> {
        string_array(&self.0, "destination_addresses")
    }

    /// Per-destination elements of the origin's row, in query order
    ///
    /// Each element is the opaque distance/duration record from the service.
    #[must_use]
    pub fn elements(&self) -> &[Value] {
        self.0
            .get("rows")
            .and_then(Value::as_array)
            .and_then(|rows| rows.first())
            .and_then(|row| row.get("elements"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Append another batch's destination entries under this origin
    ///
    /// `destination_addresses` and the elements of the first row are
    /// concatenated in order. Everything else in `self` is kept as is.
    pub fn merge(&mut self, other: Self) {
        let Value::Object(target) = &mut self.0 else {
            return;
        };
        let Value::Object(mut source) = other.0 else {
            return;
        };

        if let Some(Value::Array(addresses)) = source.remove("destination_addresses") {
            append_array(target, "destination_addresses", addresses);
        }

        let elements = source
            .remove("rows")
            .and_then(|rows| match rows {
                Value::Array(rows) => rows.into_iter().next(),
                _ => None,
            })
            .and_then(|row| match row {
                Value::Object(mut row) => row.remove("elements"),
                _ => None,
            });

        if let Some(Value::Array(elements)) = elements {
            let rows = target
                .entry("rows")
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(rows) = rows {
                if rows.is_empty() {
                    rows.push(Value::Object(serde_json::Map::new()));
                }
                if let Some(Value::Object(row)) = rows.first_mut() {
                    append_array(row, "elements", elements);
                }
            }
        }
    }
}

fn string_array<'a>(payload: &'a Value, key: &str) -> Vec<&'a str> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(|values| values.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

fn append_array(target: &mut serde_json::Map<String, Value>, key: &str, values: Vec<Value>) {
    match target.get_mut(key) {
        Some(Value::Array(existing)) => existing.extend(values),
        _ => {
            target.insert(key.to_string(), Value::Array(values));
        },
    }
}
