use folio_application::{ApplicationError, ContentInventory, ContentScanner};
use walkdir::WalkDir;

/// Inventories the asset files under the content directory so seeding can
/// report media rows that reference files that are not actually present.
/// A missing directory yields an empty inventory rather than an error.
#[derive(Debug, Default)]
pub struct WalkdirContentScanner;

impl ContentScanner for WalkdirContentScanner {
    fn scan_content(&self, content_dir: &str) -> Result<ContentInventory, ApplicationError> {
        let mut inventory = ContentInventory::default();

        for entry in WalkDir::new(content_dir).into_iter().filter_map(Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }
            inventory.scanned_files += 1;
            if let Some(name) = entry.path().file_name().and_then(|name| name.to_str()) {
                inventory.files.insert(name.to_string());
            }
        }

        Ok(inventory)
    }
}
