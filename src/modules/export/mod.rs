//! Export Module
//!
//! Writes a snapshot of the dashboard data to disk.
//!
//! - 'e' key or `:export` triggers it
//! - Sales series and category breakdown → CSV
//! - Reviews and regional revenue → JSON
//! - Files saved to the configured export dir (default `<data dir>/exports`)

mod csv_export;
mod json_export;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{info, warn};

use crate::core::{Action, NotifyLevel};
use crate::store::FixtureStore;

/// Export directory when none is configured
pub fn default_export_dir() -> PathBuf {
    crate::config::data_dir()
        .map(|dir| dir.join("exports"))
        .unwrap_or_else(|| PathBuf::from(".campadmin").join("exports"))
}

/// Generate a timestamped filename
fn generate_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{}-{}.{}", prefix, timestamp, extension)
}

/// Write every exportable list into `dir`, creating it if needed.
pub fn export_snapshot(store: &FixtureStore, dir: &Path) -> Action {
    if store.sales().is_empty()
        && store.categories().is_empty()
        && store.reviews().is_empty()
        && store.regions().is_empty()
    {
        return Action::Notify("Nothing to export".to_string(), NotifyLevel::Warn);
    }

    if let Err(e) = fs::create_dir_all(dir) {
        warn!(dir = %dir.display(), %e, "export dir unavailable");
        return Action::Notify(
            format!("Failed to create export directory: {}", e),
            NotifyLevel::Error,
        );
    }

    let mut written = Vec::new();
    let results = [
        write_one(dir, "sales", "csv", store.sales().is_empty(), |path| {
            csv_export::write_sales(path, store.sales())
        }),
        write_one(dir, "categories", "csv", store.categories().is_empty(), |path| {
            csv_export::write_categories(path, store.categories())
        }),
        write_one(dir, "reviews", "json", store.reviews().is_empty(), |path| {
            json_export::write_reviews(path, store.reviews())
        }),
        write_one(dir, "regions", "json", store.regions().is_empty(), |path| {
            json_export::write_regions(path, store.regions())
        }),
    ];

    for result in results {
        match result {
            Ok(Some(filename)) => written.push(filename),
            Ok(None) => {}
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "export failed");
                return Action::Notify(format!("Export failed: {}", e), NotifyLevel::Error);
            }
        }
    }

    info!(dir = %dir.display(), files = written.len(), "exported dashboard snapshot");
    Action::Notify(
        format!("Exported {} files to {}", written.len(), dir.display()),
        NotifyLevel::Info,
    )
}

fn write_one(
    dir: &Path,
    prefix: &str,
    extension: &str,
    skip: bool,
    write: impl FnOnce(&Path) -> anyhow::Result<usize>,
) -> anyhow::Result<Option<String>> {
    if skip {
        return Ok(None);
    }
    let filename = generate_filename(prefix, extension);
    write(&dir.join(&filename))?;
    Ok(Some(filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FixtureSet;

    fn files_with_prefix(dir: &Path, prefix: &str) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(prefix))
            })
            .collect()
    }

    #[test]
    fn test_snapshot_writes_all_lists() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("exports");
        let store = FixtureStore::builtin().unwrap();

        let action = export_snapshot(&store, &out);
        assert!(matches!(action, Action::Notify(_, NotifyLevel::Info)));

        let sales = files_with_prefix(&out, "sales-");
        assert_eq!(sales.len(), 1);
        let mut rdr = csv::Reader::from_path(&sales[0]).unwrap();
        assert_eq!(rdr.records().count(), store.sales().len());

        let reviews = files_with_prefix(&out, "reviews-");
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&reviews[0]).unwrap()).unwrap();
        assert_eq!(json[0]["product"], "Tent");
        assert_eq!(json[0]["stars"], 4);

        let regions = files_with_prefix(&out, "regions-");
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&regions[0]).unwrap()).unwrap();
        assert_eq!(json[0][0], "US-CA");
        assert_eq!(json[0][1], 3557.0);

        assert_eq!(files_with_prefix(&out, "categories-").len(), 1);
    }

    #[test]
    fn test_empty_store_has_nothing_to_export() {
        let dir = tempfile::tempdir().unwrap();
        let store = FixtureStore::new(FixtureSet::default()).unwrap();
        let action = export_snapshot(&store, dir.path());
        assert_eq!(
            action,
            Action::Notify("Nothing to export".to_string(), NotifyLevel::Warn)
        );
    }
}
