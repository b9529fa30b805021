#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_path: String,
    pub content_dir: String,
    pub cache_dir: String,
    pub photographers_seed: String,
    pub media_seed: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: "folio.sqlite3".to_string(),
            content_dir: "content".to_string(),
            cache_dir: "cache".to_string(),
            photographers_seed: "data/photographer.json".to_string(),
            media_seed: "data/media.json".to_string(),
        }
    }
}
