use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use yaml_rust2::{Yaml, YamlEmitter, YamlLoader};

use crate::config::ConfigError;

const INCLUDE_DIRECTIVE: &str = "!include";

/// Load a YAML document, resolving `!include <relative path>` lines first.
///
/// Included documents are merged in the order they appear and the including
/// document is merged on top of them, so local keys always win.
pub fn load_yaml_with_includes(path: &Path) -> Result<Yaml, ConfigError> {
    process_includes_recursive(&path.to_path_buf(), &mut Vec::new())
}

/// Same as [`load_yaml_with_includes`] but rendered back to YAML text.
pub fn render_yaml_with_includes(path: &Path) -> Result<String, ConfigError> {
    let yaml = load_yaml_with_includes(path)?;
    let mut out = String::new();
    YamlEmitter::new(&mut out).dump(&yaml)?;
    Ok(out)
}

fn process_includes_recursive(path: &PathBuf, stack: &mut Vec<PathBuf>) -> Result<Yaml, ConfigError> {
    if stack.contains(path) {
        return Err(ConfigError::IncludeCycle { path: path.clone() });
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let base_path = path.parent().unwrap_or(Path::new(""));

    let (includes, rest): (Vec<&str>, Vec<&str>) = contents
        .lines()
        .partition(|&line| line.trim().starts_with(INCLUDE_DIRECTIVE));

    stack.push(path.clone());
    let mut merged_includes: Option<Yaml> = None;
    for line in includes {
        let include_path = line.trim()[INCLUDE_DIRECTIVE.len()..].trim();
        if include_path.is_empty() {
            return Err(ConfigError::EmptyInclude { path: path.clone() });
        }
        debug!(file = %path.display(), include = include_path, "Resolving config include");
        let included = process_includes_recursive(&base_path.join(include_path), stack)?;
        merged_includes = Some(match merged_includes {
            Some(acc) => merge_yaml(&acc, &included),
            None => included,
        });
    }
    stack.pop();

    let merged_rest = YamlLoader::load_from_str(&rest.join("\n"))?
        .into_iter()
        .reduce(|acc, next| merge_yaml(&acc, &next))
        .unwrap_or(Yaml::Null);

    Ok(match (merged_includes, merged_rest) {
        (Some(includes), Yaml::Null) => includes,
        (Some(includes), rest) => merge_yaml(&includes, &rest),
        (None, rest) => rest,
    })
}

/// Deep-merge two YAML values; mappings merge key by key, anything else is replaced.
pub fn merge_yaml(base: &Yaml, override_yaml: &Yaml) -> Yaml {
    match (base, override_yaml) {
        (Yaml::Hash(base_hash), Yaml::Hash(override_hash)) => {
            let mut result = base_hash.clone();
            for (key, value) in override_hash {
                let merged = match base_hash.get(key) {
                    Some(base_value) => merge_yaml(base_value, value),
                    None => value.clone(),
                };
                result.insert(key.clone(), merged);
            }
            Yaml::Hash(result)
        }
        (_, override_value) => override_value.clone(),
    }
}
