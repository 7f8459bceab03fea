use crate::error::{AuditError, Result};
use crate::types::config::AuditConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "aeo-audit.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".aeo-audit/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/aeo-audit/config.toml";

/// Loads configuration for a run started in `root`.
///
/// An explicit file replaces the layered lookup entirely. Otherwise the global,
/// project and local files are merged in that order, later keys winning. Any
/// layer may be absent; with none present the defaults apply.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<AuditConfig> {
    if let Some(path) = explicit {
        let layer = read_layer(path)?.ok_or_else(|| {
            AuditError::ConfigParse(format!("config file not found: {}", path.display()))
        })?;
        let cfg = into_config(Value::Table(layer))?;
        cfg.validate()?;
        return Ok(cfg);
    }

    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<AuditConfig> {
    let layers = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)]);

    let mut merged = Map::new();
    for path in layers {
        if let Some(layer) = read_layer(&path)? {
            tracing::debug!(path = %path.display(), keys = layer.len(), "config layer applied");
            overlay_table(&mut merged, layer);
        }
    }

    let cfg = into_config(Value::Table(merged))?;
    cfg.validate()?;
    Ok(cfg)
}

fn into_config(value: Value) -> Result<AuditConfig> {
    value
        .try_into()
        .map_err(|e: toml::de::Error| AuditError::ConfigParse(e.to_string()))
}

/// `None` when the layer file does not exist.
fn read_layer(path: &Path) -> Result<Option<Map<String, Value>>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    toml::from_str(&content)
        .map(Some)
        .map_err(|e| AuditError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Sections merge key by key; any other value in `layer` replaces the old one.
fn overlay_table(target: &mut Map<String, Value>, layer: Map<String, Value>) {
    for (key, incoming) in layer {
        match (target.get_mut(&key), incoming) {
            (Some(Value::Table(section)), Value::Table(update)) => overlay_table(section, update),
            (_, incoming) => {
                target.insert(key, incoming);
            }
        }
    }
}
