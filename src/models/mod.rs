mod catalog;
mod entry;
mod entry_type;
mod language;
mod level;
mod localized;

#[cfg(runtime)]
type String = &'static str;
#[cfg(not(runtime))]
type String = std::string::String;

#[cfg(runtime)]
type Tags = &'static [&'static str];
#[cfg(not(runtime))]
type Tags = Vec<String>;

pub use self::catalog::Catalog;
pub use self::entry::CatalogEntry;
pub use self::entry_type::EntryType;
pub use self::language::Language;
pub use self::level::Level;
pub use self::localized::LocalizedText;
