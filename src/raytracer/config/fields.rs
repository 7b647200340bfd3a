//! Key tables and value coercion for configuration sections.
//!
//! Each section of the document is described by a static table mapping a
//! key name to a field of the target options struct together with the
//! coercion applied to its value. Defaults are the target struct's
//! `Default` values: a key that is absent leaves its field untouched.

use crate::raytracer::config::error::{ConfigError, ConfigResult};
use crate::raytracer::options::{RendererOptions, SsaaOptions, WorldOptions};
use log::debug;
use serde_yaml::{Mapping, Value};

/// Target field of a table entry, tagged with the coercion its value needs
pub(crate) enum Setter<T> {
    /// Integer >= 1
    Count(fn(&mut T) -> &mut usize),
    /// Integer in 0..=65535
    Small(fn(&mut T) -> &mut u16),
    Flag(fn(&mut T) -> &mut bool),
    /// Float, integer or numeric string
    Real(fn(&mut T) -> &mut f64),
    /// Like `Real`, strictly greater than zero
    PositiveReal(fn(&mut T) -> &mut f64),
}

pub(crate) struct Field<T> {
    pub key: &'static str,
    pub setter: Setter<T>,
}

impl<T> Setter<T> {
    fn apply(&self, target: &mut T, value: &Value, key: &str) -> ConfigResult<()> {
        match self {
            Setter::Count(field) => *field(target) = coerce_count(value, key)?,
            Setter::Small(field) => *field(target) = coerce_small(value, key)?,
            Setter::Flag(field) => *field(target) = coerce_flag(value, key)?,
            Setter::Real(field) => *field(target) = coerce_real(value, key)?,
            Setter::PositiveReal(field) => *field(target) = coerce_positive_real(value, key)?,
        }
        Ok(())
    }
}

pub(crate) const RENDERING_FIELDS: &[Field<RendererOptions>] = &[
    Field { key: "batch-size", setter: Setter::Count(|r| &mut r.batch_size) },
    Field { key: "grid-width", setter: Setter::Count(|r| &mut r.grid_width) },
    Field { key: "grid-height", setter: Setter::Count(|r| &mut r.grid_height) },
    Field { key: "adaptive-tracing", setter: Setter::Flag(|r| &mut r.adaptive_tracing) },
];

pub(crate) const SSAA_FIELDS: &[Field<SsaaOptions>] = &[
    Field { key: "active", setter: Setter::Flag(|s| &mut s.active) },
    Field { key: "subsamples", setter: Setter::Count(|s| &mut s.sample_count) },
    Field { key: "threshold", setter: Setter::Real(|s| &mut s.threshold) },
    Field { key: "res-multiplier", setter: Setter::PositiveReal(|s| &mut s.resolution_multiplier) },
    Field { key: "boundary-size", setter: Setter::Small(|s| &mut s.boundary_size) },
];

pub(crate) const WORLD_FIELDS: &[Field<WorldOptions>] = &[
    Field { key: "raster-usage-threshold", setter: Setter::Small(|w| &mut w.raster_usage_threshold) },
    Field { key: "min-resolution", setter: Setter::Real(|w| &mut w.min_resolution) },
];

/// Joins a section path and a key into the dotted form used in errors
pub(crate) fn join_key(section: &str, key: &str) -> String {
    if section.is_empty() {
        key.to_string()
    } else {
        format!("{section}.{key}")
    }
}

/// Applies every recognized entry of `section` to `target`
///
/// Keys listed in `reserved` are nested sections or file lists that the
/// caller resolves itself; they are passed over silently and never applied
/// from a table entry. Any other key without a table entry is skipped with a
/// debug record. A null value counts as absent.
pub(crate) fn apply_fields<T>(
    target: &mut T,
    section: &Mapping,
    fields: &[Field<T>],
    path: &str,
    reserved: &[&str],
) -> ConfigResult<()> {
    for (key, value) in section {
        let Some(name) = key.as_str() else {
            debug!("Skipping non-string key {} in '{}'", describe(key), path);
            continue;
        };
        if reserved.contains(&name) {
            continue;
        }
        let key_path = join_key(path, name);
        let Some(field) = fields.iter().find(|f| f.key == name) else {
            debug!("Ignoring unknown key '{key_path}'");
            continue;
        };
        if value.is_null() {
            debug!("'{key_path}' is empty, keeping default");
            continue;
        }
        field.setter.apply(target, value, &key_path)?;
        debug!("Applied '{key_path}'");
    }
    Ok(())
}

/// Short human-readable rendition of a document value for error messages
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string \"{s}\""),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().and_then(|u| i64::try_from(u).ok())),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

pub(crate) fn coerce_count(value: &Value, key: &str) -> ConfigResult<usize> {
    integer(value)
        .filter(|n| *n >= 1)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| ConfigError::schema_type(key, "an integer >= 1", describe(value)))
}

pub(crate) fn coerce_small(value: &Value, key: &str) -> ConfigResult<u16> {
    integer(value)
        .and_then(|n| u16::try_from(n).ok())
        .ok_or_else(|| ConfigError::schema_type(key, "an integer between 0 and 65535", describe(value)))
}

pub(crate) fn coerce_flag(value: &Value, key: &str) -> ConfigResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| ConfigError::schema_type(key, "a boolean", describe(value)))
}

pub(crate) fn coerce_real(value: &Value, key: &str) -> ConfigResult<f64> {
    let real = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    real.filter(|r| r.is_finite())
        .ok_or_else(|| ConfigError::schema_type(key, "a number", describe(value)))
}

pub(crate) fn coerce_positive_real(value: &Value, key: &str) -> ConfigResult<f64> {
    coerce_real(value, key)
        .ok()
        .filter(|r| *r > 0.0)
        .ok_or_else(|| ConfigError::schema_type(key, "a number > 0", describe(value)))
}
