//! Kernel spec entities
//!
//! The normalized, validated form of the `api/kernelspecs` document.
//! Instances are only produced by [`crate::validation`], so every field
//! listed here as required is guaranteed present and well-shaped.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A single validated kernel specification
#[derive(Debug, Clone, PartialEq)]
pub struct KernelSpec {
    /// Unique, non-empty identifier of the kernel
    pub name: String,
    /// Language the kernel runs (e.g. "python")
    pub language: String,
    /// Launch command line, one token per element
    pub argv: Vec<String>,
    /// Human-facing label
    pub display_name: String,
    /// Resource file name → path. Always present, possibly empty.
    pub resources: Map<String, Value>,
    /// Extra environment for the kernel process, if the server sent one
    pub env: Option<Map<String, Value>>,
    /// Opaque metadata, passed through untouched
    pub metadata: Option<Value>,
}

impl KernelSpec {
    /// Look up a resource path (e.g. `logo-64x64`)
    pub fn resource(&self, key: &str) -> Option<&str> {
        self.resources.get(key).and_then(Value::as_str)
    }
}

// Serialization mirrors the wire shape: launch fields nested under `spec`,
// `resources` beside it.
#[derive(Serialize)]
struct WireSpec<'a> {
    language: &'a str,
    argv: &'a [String],
    display_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    env: Option<&'a Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Value>,
}

#[derive(Serialize)]
struct WireEntry<'a> {
    name: &'a str,
    spec: WireSpec<'a>,
    resources: &'a Map<String, Value>,
}

impl Serialize for KernelSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireEntry {
            name: &self.name,
            spec: WireSpec {
                language: &self.language,
                argv: &self.argv,
                display_name: &self.display_name,
                env: self.env.as_ref(),
                metadata: self.metadata.as_ref(),
            },
            resources: &self.resources,
        }
        .serialize(serializer)
    }
}

/// The validated collection of kernel specs plus the server's default
///
/// Invariants: `kernelspecs` is never empty, and `default`, when set,
/// names one of its keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KernelSpecs {
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<String>,
    kernelspecs: BTreeMap<String, KernelSpec>,
}

impl KernelSpecs {
    pub(crate) fn new(default: Option<String>, kernelspecs: BTreeMap<String, KernelSpec>) -> Self {
        debug_assert!(!kernelspecs.is_empty());
        debug_assert!(default.as_ref().map_or(true, |d| kernelspecs.contains_key(d)));
        Self {
            default,
            kernelspecs,
        }
    }

    /// Name of the default kernel, if the server declared one
    ///
    /// `None` means the document carried no default. Picking a fallback is
    /// left to the caller.
    pub fn default_name(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// The default kernel spec, if one was declared
    pub fn default_spec(&self) -> Option<&KernelSpec> {
        self.default.as_ref().and_then(|name| self.kernelspecs.get(name))
    }

    pub fn get(&self, name: &str) -> Option<&KernelSpec> {
        self.kernelspecs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kernelspecs.contains_key(name)
    }

    /// Kernel names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.kernelspecs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KernelSpec> {
        self.kernelspecs.values()
    }

    pub fn len(&self) -> usize {
        self.kernelspecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kernelspecs.is_empty()
    }

    /// Consume the collection, yielding the default name and the spec map
    pub fn into_parts(self) -> (Option<String>, BTreeMap<String, KernelSpec>) {
        (self.default, self.kernelspecs)
    }
}
