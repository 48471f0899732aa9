pub mod catalog;
pub mod config;
pub mod facets;
pub mod favorites;
pub mod links;
pub mod metrics;
pub mod preferences;
pub mod storage;
pub mod testing;
pub mod view;

pub use catalog::{
    load_catalog, sample_entries, source_for, CatalogError, CatalogOrigin, CatalogSource,
    CatalogStore, Entry, EntryId, FileSource, HttpSource, LoadOutcome,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    SanitizedConfig, ServerConfig, StorageConfig,
};
pub use facets::Facets;
pub use favorites::{FavoriteSet, FAVORITES_KEY};
pub use links::WatchLinks;
pub use preferences::{dark_mode, set_dark_mode, DARK_MODE_KEY};
pub use storage::{JsonFileStore, LocalStore, MemoryStore, StorageError};
pub use view::{
    catalog_view, matching_entries, page_links, Category, PageLink, PageSize, QueryError,
    QueryState, SortDirection, ViewPage,
};
