//! Props and value types pushed into the bridge by the external store.
//!
//! Everything here is compared by value: a reconciliation cycle only touches
//! the widget for inputs that differ from the previous snapshot.

use compact_str::CompactString;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const UNKNOWN_DOCUMENT_ID: &str = "--unknown--";
pub const READ_ONLY_KEY: &str = "readOnly";

fn default_document_id() -> CompactString {
    CompactString::new(UNKNOWN_DOCUMENT_ID)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default = "default_document_id")]
    pub id: CompactString,
    #[serde(default)]
    pub value: String,
}

impl Document {
    pub fn new(id: impl Into<CompactString>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self {
            id: default_document_id(),
            value: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A validation error as reported by the store. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorAnnotation {
    pub line: u32,
    #[serde(alias = "severity")]
    pub level: Severity,
    #[serde(default)]
    pub message: String,
}

impl ErrorAnnotation {
    pub fn new(line: u32, level: Severity, message: impl Into<String>) -> Self {
        Self {
            line,
            level,
            message: message.into(),
        }
    }
}

/// Widget-native gutter annotation. `row` is 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub row: u32,
    pub column: u32,
    #[serde(rename = "type")]
    pub kind: Severity,
    pub text: String,
}

/// Option name -> value, in a stable order. `readOnly` is handled apart from
/// the rest, see [`crate::kernel::options`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorOptions(BTreeMap<String, Value>);

impl EditorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The explicit `readOnly` flag, if it is present and boolean.
    pub fn read_only(&self) -> Option<bool> {
        self.0.get(READ_ONLY_KEY).and_then(Value::as_bool)
    }

    /// Every option except `readOnly`.
    pub fn without_read_only(&self) -> EditorOptions {
        let mut rest = self.0.clone();
        rest.remove(READ_ONLY_KEY);
        Self(rest)
    }

    /// `self` overlaid with `other`; keys in `other` win.
    pub fn merged(&self, other: &EditorOptions) -> EditorOptions {
        let mut out = self.0.clone();
        out.extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self(out)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for EditorOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

impl LineRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn single(line: u32) -> Self {
        Self::new(line, line)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: CompactString,
    pub line_range: LineRange,
    #[serde(default)]
    pub kind: CompactString,
    #[serde(default)]
    pub metadata: Value,
}

impl Marker {
    pub fn new(id: impl Into<CompactString>, line_range: LineRange, kind: &str) -> Self {
        Self {
            id: id.into(),
            line_range,
            kind: CompactString::from(kind),
            metadata: Value::Null,
        }
    }
}

/// Keyed marker collection.
///
/// Deserialization never fails: a non-object input is an empty map and
/// entries that are not markers are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MarkerMap(BTreeMap<CompactString, Marker>);

impl MarkerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            if !value.is_null() {
                tracing::debug!(kind = json_kind(value), "markers are not a map, using none");
            }
            return Self::default();
        };

        let mut out = BTreeMap::new();
        for (key, entry) in object {
            match Marker::deserialize(entry) {
                Ok(marker) => {
                    out.insert(CompactString::from(key.as_str()), marker);
                }
                Err(e) => {
                    tracing::debug!(key = %key, error = %e, "skipping malformed marker");
                }
            }
        }
        Self(out)
    }

    /// Entries are keyed the same way the store keys them, which need not
    /// be the marker id.
    pub fn with(mut self, key: impl Into<CompactString>, marker: Marker) -> Self {
        self.insert(key, marker);
        self
    }

    pub fn insert(&mut self, key: impl Into<CompactString>, marker: Marker) {
        self.0.insert(key.into(), marker);
    }

    pub fn get(&self, key: &str) -> Option<&Marker> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Marker)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'de> Deserialize<'de> for MarkerMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoToLine {
    pub line: u32,
}

/// Reported by a marker placer when edits move a marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerLineUpdate {
    pub marker_id: CompactString,
    pub line_range: LineRange,
}

/// The full inbound configuration surface, minus callbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeProps {
    #[serde(default)]
    pub document: Document,
    #[serde(default, deserialize_with = "null_as_default")]
    pub editor_options: EditorOptions,
    #[serde(default, deserialize_with = "lenient_errors")]
    pub errors: Vec<ErrorAnnotation>,
    #[serde(default)]
    pub markers: MarkerMap,
    #[serde(default)]
    pub go_to_line: Option<GoToLine>,
    /// Parsed document model handed to plugins at ready time.
    #[serde(default)]
    pub spec_object: Value,
}

impl BridgeProps {
    pub fn with_document(id: &str, value: &str) -> Self {
        Self {
            document: Document::new(id, value),
            ..Self::default()
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_errors<'de, D>(deserializer: D) -> Result<Vec<ErrorAnnotation>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match ErrorAnnotation::deserialize(&item) {
            Ok(err) => out.push(err),
            Err(e) => tracing::debug!(error = %e, "skipping malformed error entry"),
        }
    }
    Ok(out)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/model.rs"]
mod tests;
