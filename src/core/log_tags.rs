//! Structured tags attached to log records
//!
//! This module provides:
//! - `TagValue`: the value of a single tag
//! - `LogTags`: a set of tags keyed by name
//! - `AppComponent`: the logical subsystem a logger speaks for

use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;

/// Default tag key under which the component is recorded
pub const DEFAULT_APP_COMPONENT_TAG: &str = "appComponent";

/// Value type for structured tags
///
/// Scalars keep their own variant; anything else (arrays, maps, large
/// unsigned numbers) is carried as a JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    Json(serde_json::Value),
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::String(s) => write!(f, "{}", s),
            TagValue::Int(i) => write!(f, "{}", i),
            TagValue::Float(fl) => write!(f, "{}", fl),
            TagValue::Bool(b) => write!(f, "{}", b),
            TagValue::Null => write!(f, "null"),
            TagValue::Json(value) => write!(f, "{}", value),
        }
    }
}

impl TagValue {
    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            TagValue::String(s) => serde_json::Value::String(s.clone()),
            TagValue::Int(i) => serde_json::Value::Number((*i).into()),
            TagValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            TagValue::Bool(b) => serde_json::Value::Bool(*b),
            TagValue::Null => serde_json::Value::Null,
            TagValue::Json(value) => value.clone(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::String(s)
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::String(s.to_string())
    }
}

impl From<&String> for TagValue {
    fn from(s: &String) -> Self {
        TagValue::String(s.clone())
    }
}

macro_rules! impl_from_lossless_int {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for TagValue {
                fn from(i: $ty) -> Self {
                    TagValue::Int(i64::from(i))
                }
            }
        )+
    };
}

impl_from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);

// Values outside the i64 range are kept exactly as JSON numbers
macro_rules! impl_from_wide_int {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for TagValue {
                fn from(i: $ty) -> Self {
                    i64::try_from(i)
                        .map(TagValue::Int)
                        .unwrap_or_else(|_| TagValue::Json(serde_json::Value::from(i)))
                }
            }
        )+
    };
}

impl_from_wide_int!(u64, usize, isize);

impl From<f64> for TagValue {
    fn from(f: f64) -> Self {
        TagValue::Float(f)
    }
}

impl From<f32> for TagValue {
    fn from(f: f32) -> Self {
        TagValue::Float(f64::from(f))
    }
}

impl From<bool> for TagValue {
    fn from(b: bool) -> Self {
        TagValue::Bool(b)
    }
}

impl From<AppComponent> for TagValue {
    fn from(component: AppComponent) -> Self {
        TagValue::String(component.0)
    }
}

impl<T: Into<TagValue>> From<Option<T>> for TagValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(TagValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for TagValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => TagValue::Null,
            serde_json::Value::Bool(b) => TagValue::Bool(b),
            serde_json::Value::String(s) => TagValue::String(s),
            serde_json::Value::Number(n) if n.is_i64() || n.is_f64() => n
                .as_i64()
                .map(TagValue::Int)
                .or_else(|| n.as_f64().map(TagValue::Float))
                .unwrap_or(TagValue::Null),
            other => TagValue::Json(other),
        }
    }
}

/// A set of structured tags
///
/// Keys are unique and insertion order is irrelevant. Two sets are combined
/// key by key, and on a collision the set applied later wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogTags {
    tags: HashMap<String, TagValue>,
}

impl LogTags {
    /// Create a new empty tag set
    pub fn new() -> Self {
        Self {
            tags: HashMap::new(),
        }
    }

    /// Add a tag (builder version)
    #[must_use]
    pub fn with_tag<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<TagValue>,
    {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Add or overwrite a tag
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<TagValue>,
    {
        self.tags.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&TagValue> {
        self.tags.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, TagValue> {
        self.tags.iter()
    }

    /// Key-wise union of `self` and `overrides`
    ///
    /// Both inputs are left untouched. For keys present in both sets the
    /// value from `overrides` is kept.
    #[must_use]
    pub fn combine(&self, overrides: &LogTags) -> LogTags {
        let mut merged = self.tags.clone();
        merged.extend(
            overrides
                .tags
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        LogTags { tags: merged }
    }

    /// Tags sorted by key, for stable rendering
    pub fn sorted(&self) -> Vec<(&str, &TagValue)> {
        let mut pairs: Vec<_> = self.tags.iter().map(|(k, v)| (k.as_str(), v)).collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs
    }

    /// Format tags as key=value pairs, sorted by key
    pub fn format_tags(&self) -> String {
        self.sorted()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_json_map(&self) -> serde_json::Map<String, serde_json::Value> {
        self.tags
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json_value()))
            .collect()
    }
}

impl fmt::Display for LogTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_tags())
    }
}

impl<K, V> FromIterator<(K, V)> for LogTags
where
    K: Into<String>,
    V: Into<TagValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tags: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, TagValue>> for LogTags {
    fn from(tags: HashMap<String, TagValue>) -> Self {
        Self { tags }
    }
}

impl<'a> IntoIterator for &'a LogTags {
    type Item = (&'a String, &'a TagValue);
    type IntoIter = hash_map::Iter<'a, String, TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

/// A significant component of the application, mentioned in every record
/// of a logger derived with `for_component`
///
/// An empty component means the logger has none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppComponent(String);

impl AppComponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for AppComponent {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for AppComponent {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for AppComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
