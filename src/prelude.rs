pub use anyhow::{Result, Context, bail};
pub use newcomer_guide::{
    CatalogEntry,
    FilterCriteria,
    FilterEngine,
    Language,
    Level,
    PreferenceStore,
    Repository,
    Tab
};
