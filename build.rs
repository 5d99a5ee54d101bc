use std::path::PathBuf;
use anyhow::{bail, Context, Result};
use phf_codegen::Map;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

include!("src/models/mod.rs");

const CATALOG_SOURCE: &str = include_str!("resources/catalog.toml");
const MANIFEST_TOML: &str = include_str!("Cargo.toml");

// ===== BUILD CONFIGURATION =====

struct BuildConfiguration {
    catalog_file: PathBuf,
}

impl BuildConfiguration {
    fn new() -> Result<Self> {
        let output_dir = PathBuf::from(
            std::env::var("OUT_DIR").context("OUT_DIR is not set by cargo")?
        );
        let catalog_file = output_dir.join("catalog.rs");

        Ok(Self { catalog_file })
    }
}

// ===== APPLICATION METADATA =====

struct ApplicationMetadata {
    name: &'static str,
    description: &'static str,
    version: &'static str,
    id: String,
    title: String,
    authors: Vec<String>,
}

impl ApplicationMetadata {
    fn extract_from_cargo() -> Result<Self> {
        let name = env!("CARGO_PKG_NAME");
        let description = env!("CARGO_PKG_DESCRIPTION");
        let version = env!("CARGO_PKG_VERSION");

        let manifest: toml::Value = toml::from_str(MANIFEST_TOML)
            .context("Failed to parse Cargo.toml")?;

        let package = manifest.get("package")
            .context("Missing [package] section in Cargo.toml")?;

        let metadata = package.get("metadata")
            .context("Missing [package.metadata] section in Cargo.toml")?;

        let id = TomlField::required_string(metadata, "id", "package.metadata")?;
        let title = TomlField::required_string(metadata, "title", "package.metadata")?;
        let author = TomlField::required_string(metadata, "author", "package.metadata")?;

        Ok(Self {
            name,
            description,
            version,
            id,
            title,
            authors: vec![author],
        })
    }
}

// ===== TOML FIELD ACCESS =====

struct TomlField;

impl TomlField {
    fn required_string(value: &toml::Value, key: &str, context: &str) -> Result<String> {
        let string = value.get(key)
            .and_then(|v| v.as_str())
            .with_context(|| format!("Key '{key}' in {context} is missing or not a string"))?;

        if string.trim().is_empty() {
            bail!("Key '{key}' in {context} must not be empty");
        }

        Ok(string.to_string())
    }

    fn optional_string(value: &toml::Value, key: &str, context: &str) -> Result<Option<String>> {
        match value.get(key) {
            None => Ok(None),
            Some(_) => Self::required_string(value, key, context).map(Some),
        }
    }

    fn optional_price(value: &toml::Value, key: &str, context: &str) -> Result<Option<u32>> {
        let Some(raw) = value.get(key) else {
            return Ok(None);
        };

        let price = raw.as_integer()
            .with_context(|| format!("Key '{key}' in {context} is not an integer"))?;

        if price < 0 {
            bail!("Key '{key}' in {context} must not be negative, found {price}");
        }

        u32::try_from(price)
            .map(Some)
            .with_context(|| format!("Key '{key}' in {context} is out of range"))
    }

    fn boolean(value: &toml::Value, key: &str, context: &str) -> Result<bool> {
        value.get(key)
            .and_then(|v| v.as_bool())
            .with_context(|| format!("Key '{key}' in {context} is missing or not a boolean"))
    }

    fn string_array(value: &toml::Value, key: &str, context: &str) -> Result<Vec<String>> {
        let Some(raw) = value.get(key) else {
            return Ok(Vec::new());
        };

        let array = raw.as_array()
            .with_context(|| format!("Key '{key}' in {context} is not an array"))?;

        array.iter()
            .enumerate()
            .map(|(i, v)| {
                v.as_str()
                    .filter(|s| !s.trim().is_empty())
                    .map(|s| s.to_string())
                    .with_context(|| format!("Element {i} of '{key}' in {context} is not a non-empty string"))
            })
            .collect()
    }

    fn localized(value: &toml::Value, key: &str, context: &str) -> Result<LocalizedText> {
        let table = value.get(key)
            .with_context(|| format!("Missing [{key}] table in {context}"))?;

        let nested_context = format!("{context}.{key}");
        Ok(LocalizedText {
            en: Self::required_string(table, Language::English.code(), &nested_context)?,
            de: Self::required_string(table, Language::German.code(), &nested_context)?,
        })
    }
}

// ===== CATALOG READER =====

struct CatalogReader;

impl CatalogReader {
    fn read_entries(source: &str) -> Result<Vec<CatalogEntry>> {
        let document: toml::Value = toml::from_str(source)
            .context("Failed to parse resources/catalog.toml")?;

        let entries = document.get("entries")
            .and_then(|v| v.as_array())
            .context("resources/catalog.toml has no [[entries]] array")?;

        entries.iter()
            .enumerate()
            .map(|(index, entry)| Self::read_single_entry(index, entry))
            .collect()
    }

    fn read_single_entry(index: usize, value: &toml::Value) -> Result<CatalogEntry> {
        let id = TomlField::required_string(value, "id", &format!("entries[{index}]"))?;
        let context = format!("entry '{id}'");

        let type_name = TomlField::required_string(value, "type", &context)?;
        let entry_type = EntryType::parse(&type_name)
            .with_context(|| format!("Unknown type '{type_name}' in {context}"))?;

        let level = TomlField::optional_string(value, "level", &context)?
            .map(|name| {
                Level::parse(&name).with_context(|| format!("Unknown level '{name}' in {context}"))
            })
            .transpose()?;

        Ok(CatalogEntry {
            title: TomlField::localized(value, "title", &context)?,
            description: TomlField::localized(value, "description", &context)?,
            entry_type,
            level,
            location: TomlField::optional_string(value, "location", &context)?,
            price: TomlField::optional_price(value, "price", &context)?,
            online: TomlField::boolean(value, "online", &context)?,
            duration: TomlField::optional_string(value, "duration", &context)?,
            tags: TomlField::string_array(value, "tags", &context)?,
            provider: TomlField::required_string(value, "provider", &context)?,
            id,
        })
    }
}

// ===== CATALOG VALIDATOR =====

struct CatalogValidator;

impl CatalogValidator {
    fn validate(entries: &[CatalogEntry]) -> Result<()> {
        if entries.is_empty() {
            bail!("resources/catalog.toml contains no entries");
        }

        let mut seen = HashSet::new();
        for entry in entries {
            Self::validate_identifier(&entry.id)?;
            if !seen.insert(entry.id.as_str()) {
                bail!("Duplicate entry id '{}'", entry.id);
            }
        }

        Ok(())
    }

    fn validate_identifier(id: &str) -> Result<()> {
        let kebab = heck::AsKebabCase(id).to_string();
        if kebab != id {
            bail!("Entry id '{id}' must be kebab-case (expected '{kebab}')");
        }
        Ok(())
    }
}

// ===== CATALOG CODE GENERATION =====

struct CatalogIndexMaps {
    entry_id_to_index: HashMap<String, usize>,
    entries_by_type_index: Vec<Vec<usize>>,
}

impl CatalogIndexMaps {
    fn build_from_entries(entries: &[CatalogEntry]) -> Self {
        Self {
            entry_id_to_index: Self::build_entry_id_index(entries),
            entries_by_type_index: Self::build_entries_by_type_index(entries),
        }
    }

    fn build_entry_id_index(entries: &[CatalogEntry]) -> HashMap<String, usize> {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.id.clone(), index))
            .collect()
    }

    fn build_entries_by_type_index(entries: &[CatalogEntry]) -> Vec<Vec<usize>> {
        let mut entries_by_type = vec![Vec::new(); EntryType::COUNT];

        for (entry_index, entry) in entries.iter().enumerate() {
            entries_by_type[entry.entry_type.index()].push(entry_index);
        }

        entries_by_type
    }
}

// ===== CATALOG CODE BUILDER =====

struct CatalogCodeBuilder;

impl CatalogCodeBuilder {
    fn format_indexed_vector_collection<T: Debug>(vectors: &[Vec<T>]) -> String {
        let formatted_vectors = vectors.iter()
            .map(|vector| format!("&{vector:?}"))
            .collect::<Vec<_>>()
            .join(", ");

        format!("&[{formatted_vectors}]")
    }

    fn format_phf_hash_map<K: AsRef<str>>(map: &HashMap<K, usize>) -> String {
        let mut phf_builder = Map::new();
        for (key, value) in map {
            phf_builder.entry(key.as_ref(), value.to_string());
        }

        phf_builder.build().to_string()
    }

    fn format_localized_text(text: &LocalizedText) -> String {
        format!("LocalizedText {{ en: {en:?}, de: {de:?} }}", en = text.en, de = text.de)
    }

    fn format_optional_level_field(level: Option<Level>) -> String {
        level
            .map(|level| format!("Some(Level::{level:?})"))
            .unwrap_or_else(|| "None".to_string())
    }

    fn format_entry_struct(entry: &CatalogEntry) -> String {
        format!(
            "CatalogEntry {{
                id: {id:?},
                title: {title},
                description: {description},
                entry_type: EntryType::{entry_type:?},
                level: {level},
                location: {location:?},
                price: {price:?},
                online: {online},
                duration: {duration:?},
                tags: &{tags:?},
                provider: {provider:?}
            }}",
            id = entry.id,
            title = Self::format_localized_text(&entry.title),
            description = Self::format_localized_text(&entry.description),
            entry_type = entry.entry_type,
            level = Self::format_optional_level_field(entry.level),
            location = entry.location,
            price = entry.price,
            online = entry.online,
            duration = entry.duration,
            tags = entry.tags,
            provider = entry.provider
        )
    }

    fn format_entries_array(entries: &[CatalogEntry]) -> String {
        entries.iter()
            .map(Self::format_entry_struct)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn build_catalog_struct_code(entries: &[CatalogEntry], index_maps: &CatalogIndexMaps) -> String {
        let entries_array = Self::format_entries_array(entries);
        let entries_map = Self::format_phf_hash_map(&index_maps.entry_id_to_index);
        let type_entries = Self::format_indexed_vector_collection(&index_maps.entries_by_type_index);

        format!(
            "Catalog {{
                entries: &[{entries_array}],
                entries_map: {entries_map},
                type_entries: {type_entries}
            }}"
        )
    }
}

// ===== CATALOG PROCESSOR =====

struct CatalogProcessor<'a> {
    config: &'a BuildConfiguration,
}

impl<'a> CatalogProcessor<'a> {
    fn new(config: &'a BuildConfiguration) -> Self {
        Self { config }
    }

    fn process_catalog_data(&self) -> Result<()> {
        let entries = CatalogReader::read_entries(CATALOG_SOURCE)?;
        CatalogValidator::validate(&entries)?;
        self.write_catalog_code_to_file(&entries)
    }

    fn write_catalog_code_to_file(&self, entries: &[CatalogEntry]) -> Result<()> {
        let index_maps = CatalogIndexMaps::build_from_entries(entries);
        let catalog_code = CatalogCodeBuilder::build_catalog_struct_code(entries, &index_maps);

        std::fs::write(&self.config.catalog_file, catalog_code)
            .context("Failed to write catalog file")
    }
}

// ===== CARGO ENVIRONMENT =====

struct CargoEnvironmentVariables;

impl CargoEnvironmentVariables {
    fn emit_build_configuration_flags() {
        println!("cargo:rustc-cfg=runtime");
    }

    fn emit_application_metadata(metadata: &ApplicationMetadata) {
        println!("cargo:rustc-env=APP_NAME={}", metadata.name);
        println!("cargo:rustc-env=APP_DESCRIPTION={}", metadata.description);
        println!("cargo:rustc-env=APP_VERSION={}", metadata.version);
        println!("cargo:rustc-env=APP_ID={}", metadata.id);
        println!("cargo:rustc-env=APP_TITLE={}", metadata.title);
        println!("cargo:rustc-env=APP_AUTHORS={}", metadata.authors.join(","));
    }

    fn emit_all_environment_variables(metadata: &ApplicationMetadata) {
        Self::emit_build_configuration_flags();
        Self::emit_application_metadata(metadata);
    }
}

// ===== BUILD ENVIRONMENT =====

struct BuildEnvironment;

impl BuildEnvironment {
    fn setup_cargo_configuration() {
        println!("cargo:rustc-check-cfg=cfg(runtime)");
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed=resources");
        println!("cargo:rerun-if-changed=src/models");
    }
}

// ===== BUILD PIPELINE =====

struct BuildPipeline {
    config: BuildConfiguration,
    app_metadata: ApplicationMetadata,
}

impl BuildPipeline {
    fn new() -> Result<Self> {
        Ok(Self {
            config: BuildConfiguration::new()?,
            app_metadata: ApplicationMetadata::extract_from_cargo()?,
        })
    }

    fn execute_complete_build(&self) -> Result<()> {
        BuildEnvironment::setup_cargo_configuration();
        CatalogProcessor::new(&self.config).process_catalog_data()?;
        CargoEnvironmentVariables::emit_all_environment_variables(&self.app_metadata);
        Ok(())
    }
}

// ===== MAIN =====

fn main() -> Result<()> {
    BuildPipeline::new()?.execute_complete_build()
}
