//! Kernel spec document validation
//!
//! Turns an untyped `api/kernelspecs` document into [`KernelSpecs`].
//!
//! Validation partitions before it checks: each entry under `kernelspecs`
//! is validated on its own and malformed ones are dropped with a warning.
//! Only document-level problems (no container, nothing usable left, a
//! default that does not resolve) fail the call.

mod predicates;

pub use predicates::EntryDefect;

use serde_json::{Map, Value};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::domain::{KernelSpec, KernelSpecs};
use crate::error::ValidationError;
use predicates::{as_any, as_object, as_text, as_text_array, optional, required};

/// Validate a full kernel spec document
///
/// Malformed entries are skipped. Fails with
/// [`ValidationError::MissingKernelspecs`] when there is no `kernelspecs`
/// object, and with [`ValidationError::NoValidKernelspecs`] when no entry
/// survives or the declared `default` is not among the survivors.
pub fn validate_spec_models(raw: &Value) -> Result<KernelSpecs, ValidationError> {
    let entries = raw
        .get("kernelspecs")
        .and_then(Value::as_object)
        .ok_or(ValidationError::MissingKernelspecs)?;

    let mut kernelspecs = BTreeMap::new();
    for (key, entry) in entries {
        let spec = match check_spec_model(entry) {
            Ok(spec) => spec,
            Err(defect) => {
                warn!("Removing errant kernel spec '{}': {}", key, defect);
                continue;
            }
        };

        if spec.name != *key {
            debug!("Kernel spec under key '{}' is named '{}'", key, spec.name);
        }

        match kernelspecs.entry(spec.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(spec);
            }
            Entry::Occupied(_) => {
                warn!(
                    "Removing kernel spec '{}': duplicate name '{}'",
                    key, spec.name
                );
            }
        }
    }

    let default = resolve_default(raw)?;

    if kernelspecs.is_empty() {
        return Err(ValidationError::NoValidKernelspecs);
    }

    if let Some(name) = &default {
        if !kernelspecs.contains_key(name) {
            warn!("Default kernel spec '{}' is missing or invalid", name);
            return Err(ValidationError::NoValidKernelspecs);
        }
    }

    debug!(
        "Validated {} of {} kernel specs (default: {:?})",
        kernelspecs.len(),
        entries.len(),
        default
    );

    Ok(KernelSpecs::new(default, kernelspecs))
}

/// Validate a single kernel spec entry
///
/// Returns `None` if any required field is missing or malformed; there is
/// no partially valid entry.
pub fn validate_spec_model(entry: &Value) -> Option<KernelSpec> {
    check_spec_model(entry).ok()
}

/// Like [`validate_spec_model`], reporting the first defect found
pub fn check_spec_model(entry: &Value) -> Result<KernelSpec, EntryDefect> {
    let entry = as_object(entry).ok_or(EntryDefect::NotAnObject)?;

    let name = required(entry, "name", as_text)?;
    if name.is_empty() {
        return Err(EntryDefect::Malformed("name"));
    }
    let spec = required(entry, "spec", as_object)?;

    let language = required(spec, "language", as_text)?;
    let argv = required(spec, "argv", as_text_array)?;
    let display_name = required(spec, "display_name", as_text)?;
    let resources = resources(entry, spec)?;
    let env = optional(spec, "env", as_object)?;
    let metadata = optional(spec, "metadata", as_any)?;

    Ok(KernelSpec {
        name: name.to_string(),
        language: language.to_string(),
        argv,
        display_name: display_name.to_string(),
        resources: resources.clone(),
        env: env.cloned(),
        metadata: metadata.cloned(),
    })
}

/// `resources` lives beside `spec`; older servers nest it inside `spec`.
fn resources<'a>(
    entry: &'a Map<String, Value>,
    spec: &'a Map<String, Value>,
) -> Result<&'a Map<String, Value>, EntryDefect> {
    if entry.contains_key("resources") {
        required(entry, "resources", as_object)
    } else {
        required(spec, "resources", as_object)
    }
}

/// Read the top-level `default`
///
/// Absent, `null` and `""` mean no default. Any other non-string value
/// is a declared default that can never resolve.
fn resolve_default(raw: &Value) -> Result<Option<String>, ValidationError> {
    match raw.get("default") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(name)) if name.is_empty() => Ok(None),
        Some(Value::String(name)) => Ok(Some(name.clone())),
        Some(other) => {
            warn!("Default kernel spec is not a string: {}", other);
            Err(ValidationError::NoValidKernelspecs)
        }
    }
}
