//! Editor configuration from the host page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use blockdraw::config::EditorConfig;

/// Parse the `data-config` JSON, falling back to defaults when it is absent or invalid.
pub fn resolve_config(raw: Option<&str>) -> EditorConfig {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return EditorConfig::default();
    };
    match EditorConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring data-config: {err}");
            EditorConfig::default()
        }
    }
}
