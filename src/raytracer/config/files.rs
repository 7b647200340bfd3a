use crate::raytracer::config::error::{ConfigError, ConfigResult};
use crate::raytracer::config::fields::{describe, join_key};
use glob::MatchOptions;
use log::{debug, warn};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Reads the optional `<kind>-path` prefix of a world section
///
/// An absent prefix means patterns resolve against the working directory.
pub(crate) fn path_prefix(world: &Mapping, key: &str) -> ConfigResult<PathBuf> {
    match world.get(key) {
        None | Some(Value::Null) => Ok(PathBuf::new()),
        Some(Value::String(prefix)) => Ok(PathBuf::from(prefix)),
        Some(other) => Err(ConfigError::schema_type(
            join_key("world", key),
            "a directory path",
            describe(other),
        )),
    }
}

/// Reads the glob patterns listed under `key`
///
/// A single string is accepted as a one-pattern list.
pub(crate) fn patterns(world: &Mapping, key: &str) -> ConfigResult<Option<Vec<String>>> {
    let key_path = join_key("world", key);
    match world.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(pattern)) => Ok(Some(vec![pattern.clone()])),
        Some(Value::Sequence(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(pattern) => Ok(pattern.clone()),
                other => Err(ConfigError::schema_type(
                    key_path.as_str(),
                    "a list of file patterns",
                    describe(other),
                )),
            })
            .collect::<ConfigResult<Vec<_>>>()
            .map(Some),
        Some(other) => Err(ConfigError::schema_type(
            key_path,
            "a list of file patterns",
            describe(other),
        )),
    }
}

/// Expands every pattern relative to `prefix` and unions the matches
///
/// Files matched by more than one pattern appear once. Wildcards do not
/// match a leading dot, so hidden files (e.g. `._tile1.tif`) are only
/// picked up when the pattern names the dot explicitly.
pub(crate) fn expand(prefix: &Path, patterns: &[String], key: &str) -> ConfigResult<BTreeSet<PathBuf>> {
    let mut files = BTreeSet::new();
    for pattern in patterns {
        let joined = prefix.join(pattern);
        let joined = joined.to_string_lossy();
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };
        let entries = glob::glob_with(&joined, options).map_err(|source| ConfigError::Pattern {
            key: key.to_string(),
            pattern: joined.to_string(),
            source,
        })?;

        let before = files.len();
        let mut matched = 0usize;
        for entry in entries {
            match entry {
                Ok(path) => {
                    matched += 1;
                    files.insert(path);
                }
                Err(err) => warn!("Skipping unreadable entry while expanding '{joined}': {err}"),
            }
        }

        if matched == 0 {
            warn!("Pattern '{joined}' in '{key}' matched no files");
        } else {
            debug!(
                "Pattern '{joined}' matched {matched} file(s), {} new",
                files.len() - before
            );
        }
    }
    Ok(files)
}

/// Resolves one file list of the world section, e.g. `dem-files` against `dem-path`
///
/// Returns `None` when the list key is absent so the caller keeps its default.
pub(crate) fn resolve_files(
    world: &Mapping,
    files_key: &str,
    path_key: &str,
) -> ConfigResult<Option<BTreeSet<PathBuf>>> {
    let Some(patterns) = patterns(world, files_key)? else {
        return Ok(None);
    };
    let prefix = path_prefix(world, path_key)?;
    expand(&prefix, &patterns, &join_key("world", files_key)).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raytracer::config::test_support::ScratchDir;

    fn world(text: &str) -> Mapping {
        match serde_yaml::from_str::<Value>(text).unwrap() {
            Value::Mapping(m) => m,
            other => panic!("expected a mapping, got {other:?}"),
        }
    }

    #[test]
    fn test_overlapping_patterns_are_deduplicated() {
        let dir = ScratchDir::new("dedup");
        dir.touch("tile1.tif");
        dir.touch("tile2.tif");

        let patterns = vec!["*.tif".to_string(), "tile1.tif".to_string()];
        let files = expand(dir.path(), &patterns, "world.dem-files").unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.contains(&dir.path().join("tile1.tif")));
        assert!(files.contains(&dir.path().join("tile2.tif")));
    }

    #[test]
    fn test_matches_are_rooted_under_prefix() {
        let dir = ScratchDir::new("rooted");
        dir.touch("a.tif");
        dir.touch("b.tif");
        dir.touch("notes.txt");

        let files = expand(dir.path(), &["*.tif".to_string()], "world.dem-files").unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.starts_with(dir.path())));
        assert!(files.iter().all(|p| p.extension().is_some_and(|e| e == "tif")));
    }

    #[test]
    fn test_wildcard_skips_hidden_files() {
        let dir = ScratchDir::new("hidden");
        dir.touch("tile1.tif");
        dir.touch("._tile1.tif");

        let files = expand(dir.path(), &["*.tif".to_string()], "world.dem-files").unwrap();
        assert_eq!(files.len(), 1);
        assert!(files.contains(&dir.path().join("tile1.tif")));

        let files = expand(dir.path(), &[".*.tif".to_string()], "world.dem-files").unwrap();
        assert_eq!(files.len(), 1);
        assert!(files.contains(&dir.path().join("._tile1.tif")));
    }

    #[test]
    fn test_pattern_matching_nothing_is_empty() {
        let dir = ScratchDir::new("empty");
        let files = expand(dir.path(), &["*.tif".to_string()], "world.dom-files").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = expand(Path::new(""), &["[".to_string()], "world.dem-files").unwrap_err();
        assert!(matches!(err, ConfigError::Pattern { .. }));
        assert_eq!(err.key(), Some("world.dem-files"));
    }

    #[test]
    fn test_single_string_pattern() {
        let section = world("dem-files: \"*.tif\"\n");
        assert_eq!(patterns(&section, "dem-files").unwrap(), Some(vec!["*.tif".to_string()]));
    }

    #[test]
    fn test_non_string_pattern_is_rejected() {
        let section = world("dem-files: [\"*.tif\", 3]\n");
        let err = patterns(&section, "dem-files").unwrap_err();
        assert_eq!(err.key(), Some("world.dem-files"));
    }

    #[test]
    fn test_missing_list_resolves_to_none() {
        let section = world("dem-path: /data\n");
        assert_eq!(resolve_files(&section, "dem-files", "dem-path").unwrap(), None);
    }

    #[test]
    fn test_prefix_must_be_a_string() {
        let section = world("dem-path: [1, 2]\ndem-files: [\"*.tif\"]\n");
        let err = resolve_files(&section, "dem-files", "dem-path").unwrap_err();
        assert_eq!(err.key(), Some("world.dem-path"));
    }
}
