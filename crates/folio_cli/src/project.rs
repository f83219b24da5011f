//! Site scaffolding

use anyhow::{Context, Result};
use folio_content::ContentRegistry;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{FolioConfig, CONFIG_FILE};

/// Registry file written by `folio init --with-content`
pub const CONTENT_FILE: &str = "content.toml";

/// Create folio.toml (and optionally an editable content.toml) in `path`.
///
/// Returns the files written. Existing files are left alone unless `force`.
pub fn create_site(path: &Path, with_content: bool, force: bool) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let config_path = path.join(CONFIG_FILE);
    let content_path = path.join(CONTENT_FILE);
    for target in [Some(&config_path), with_content.then_some(&content_path)]
        .into_iter()
        .flatten()
    {
        if target.exists() && !force {
            anyhow::bail!(
                "{} already exists. Use --force to overwrite it.",
                target.display()
            );
        }
    }

    let mut config = FolioConfig::default();
    let mut written = Vec::new();

    if with_content {
        let registry = ContentRegistry::builtin().to_toml()?;
        fs::write(&content_path, registry)
            .with_context(|| format!("Failed to write {}", content_path.display()))?;
        config.content.path = Some(CONTENT_FILE.to_string());
        written.push(content_path);
    }

    fs::write(&config_path, config.to_toml()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    written.insert(0, config_path);

    tracing::debug!("create_site - wrote {} file(s) in {}", written.len(), path.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("folio-init-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = scratch_dir("plain");
        let written = create_site(&dir, false, false).unwrap();
        assert_eq!(written, vec![dir.join(CONFIG_FILE)]);

        let config = FolioConfig::load(&dir).unwrap();
        assert!(config.content.path.is_none());
        assert!(create_site(&dir, false, false).is_err());
        assert!(create_site(&dir, false, true).is_ok());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_init_with_content_round_trips_registry() {
        let dir = scratch_dir("content");
        create_site(&dir, true, false).unwrap();

        let registry = ContentRegistry::load(&dir.join(CONTENT_FILE)).unwrap();
        assert_eq!(registry, ContentRegistry::builtin());

        let config = FolioConfig::load(&dir).unwrap();
        assert_eq!(config.content.path.as_deref(), Some(CONTENT_FILE));
        let _ = fs::remove_dir_all(&dir);
    }
}
