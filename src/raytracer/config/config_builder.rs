use crate::raytracer::config::error::{ConfigError, ConfigResult};
use crate::raytracer::config::fields::{
    apply_fields, coerce_count, describe, join_key, RENDERING_FIELDS, SSAA_FIELDS, WORLD_FIELDS,
};
use crate::raytracer::config::files::resolve_files;
use crate::raytracer::options::{LogLevel, RayTracerOptions, RendererOptions, WorldOptions};
use log::{debug, info};
use serde_yaml::{Mapping, Value};
use std::path::Path;

const ROOT_KEY: &str = "<root>";

/// Loads a YAML configuration file and translates it into ray tracer options
///
/// # Errors
/// * [`ConfigError::FileAccess`] - the file is missing or unreadable
/// * [`ConfigError::Parse`] - the file is not valid YAML
/// * [`ConfigError::SchemaType`] - a recognized key holds an unusable value
/// * [`ConfigError::Pattern`] - a DEM/DOM file pattern is not a valid glob
///
/// Unknown keys are never errors.
pub fn translate(path: impl AsRef<Path>) -> ConfigResult<RayTracerOptions> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loading configuration from {}", path.display());
    translate_document(&text, &path.display().to_string())
}

/// Translates a configuration document already held in memory
///
/// Same rules as [`translate`]; relative file patterns still resolve against
/// the working directory.
pub fn translate_str(text: &str) -> ConfigResult<RayTracerOptions> {
    translate_document(text, "<inline>")
}

fn translate_document(text: &str, origin: &str) -> ConfigResult<RayTracerOptions> {
    let document: Value = serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    let root = match document {
        Value::Mapping(root) => root,
        Value::Null => Mapping::new(),
        other => {
            return Err(ConfigError::schema_type(ROOT_KEY, "a mapping", describe(&other)));
        }
    };

    let thread_count = match non_null(&root, "n-threads") {
        Some(value) => coerce_count(value, "n-threads")?,
        None => 1,
    };
    let log_level = match non_null(&root, "log-level") {
        Some(value) => parse_log_level(value)?,
        None => LogLevel::default(),
    };
    debug!("Threads: {thread_count}, log level: {log_level}");

    let renderer = match section(&root, "rendering", "")? {
        Some(cfg) => rendering_options(cfg)?,
        None => RendererOptions::default(),
    };
    let world = match section(&root, "world", "")? {
        Some(cfg) => world_options(cfg)?,
        None => WorldOptions::default(),
    };

    Ok(RayTracerOptions::builder(thread_count, log_level)
        .renderer(renderer)
        .world(world)
        .build())
}

fn rendering_options(cfg: &Mapping) -> ConfigResult<RendererOptions> {
    let mut renderer = RendererOptions::default();
    apply_fields(&mut renderer, cfg, RENDERING_FIELDS, "rendering", &["ssaa"])?;
    if let Some(ssaa) = section(cfg, "ssaa", "rendering")? {
        apply_fields(&mut renderer.ssaa, ssaa, SSAA_FIELDS, "rendering.ssaa", &[])?;
    }
    Ok(renderer)
}

fn world_options(cfg: &Mapping) -> ConfigResult<WorldOptions> {
    let mut world = WorldOptions::default();
    apply_fields(
        &mut world,
        cfg,
        WORLD_FIELDS,
        "world",
        &["dem-path", "dem-files", "dom-path", "dom-files"],
    )?;
    if let Some(files) = resolve_files(cfg, "dem-files", "dem-path")? {
        world.dem_files = files;
    }
    if let Some(files) = resolve_files(cfg, "dom-files", "dom-path")? {
        world.dom_files = files;
    }
    Ok(world)
}

fn non_null<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}

/// Returns the nested mapping under `key`, treating an empty entry as absent
fn section<'a>(map: &'a Mapping, key: &str, parent: &str) -> ConfigResult<Option<&'a Mapping>> {
    match non_null(map, key) {
        None => Ok(None),
        Some(Value::Mapping(inner)) => Ok(Some(inner)),
        Some(other) => Err(ConfigError::schema_type(
            join_key(parent, key),
            "a mapping",
            describe(other),
        )),
    }
}

fn parse_log_level(value: &Value) -> ConfigResult<LogLevel> {
    let level = match value {
        Value::Number(n) => n.as_i64().and_then(|code| LogLevel::try_from(code).ok()),
        Value::String(name) => name.parse::<LogLevel>().ok(),
        _ => None,
    };
    level.ok_or_else(|| {
        ConfigError::schema_type("log-level", "0, 1, 2, none, minimal or detailed", describe(value))
    })
}
