use super::models::{Catalog, CatalogEntry, EntryType, Level, LocalizedText};

pub static APP_CATALOG: Catalog = include!(concat!(env!("OUT_DIR"), "/catalog.rs"));
pub const APP_ID: &str = env!("APP_ID");
pub const APP_NAME: &str = env!("APP_NAME");
pub const APP_VERSION: &str = env!("APP_VERSION");
pub const APP_TITLE: &str = env!("APP_TITLE");
pub const APP_DESCRIPTION: &str = env!("APP_DESCRIPTION");
pub const APP_AUTHORS: &str = env!("APP_AUTHORS");
pub const LOG_ENV_VAR: &str = "NEWCOMER_GUIDE_LOG";
