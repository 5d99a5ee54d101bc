use std::collections::BTreeSet;
use std::io::Write;

use heck::ToTitleCase;
use newcomer_guide::rich_text::{self, Span};

use super::prelude::*;

const BOLD_START: &str = "\x1b[1m";
const BOLD_END: &str = "\x1b[0m";

struct Labels {
    no_results: &'static str,
    free: &'static str,
    online: &'static str,
    price_unknown: &'static str,
    provider: &'static str,
    duration: &'static str,
    location: &'static str,
    level: &'static str,
    any_level: &'static str,
    language: &'static str,
}

const ENGLISH_LABELS: Labels = Labels {
    no_results: "No results match the selected filters.",
    free: "Free",
    online: "Online",
    price_unknown: "Price on request",
    provider: "Provider",
    duration: "Duration",
    location: "Location",
    level: "Level",
    any_level: "All levels",
    language: "Language",
};

const GERMAN_LABELS: Labels = Labels {
    no_results: "Keine Ergebnisse für die gewählten Filter.",
    free: "Kostenlos",
    online: "Online",
    price_unknown: "Preis auf Anfrage",
    provider: "Anbieter",
    duration: "Dauer",
    location: "Ort",
    level: "Niveau",
    any_level: "Alle Niveaus",
    language: "Sprache",
};

impl Labels {
    const fn for_language(language: Language) -> &'static Self {
        match language {
            Language::English => &ENGLISH_LABELS,
            Language::German => &GERMAN_LABELS,
        }
    }
}

/// Renders catalog data as terminal text.
pub struct Printer<W> {
    out: W,
    language: Language,
    styled: bool,
}

impl <W: Write> Printer<W> {

    pub const fn new(out: W, language: Language, styled: bool) -> Self {
        Self { out, language, styled }
    }

    fn labels(&self) -> &'static Labels {
        Labels::for_language(self.language)
    }

    pub fn print_entries(&mut self, entries: &[&CatalogEntry]) -> Result<()> {
        if entries.is_empty() {
            writeln!(self.out, "{}", self.labels().no_results)?;
            return Ok(());
        }

        for entry in entries {
            self.print_summary(entry)?;
            write!(self.out, "    ")?;
            self.print_rich_text(entry.description.get(self.language))?;
        }

        Ok(())
    }

    pub fn print_summary(&mut self, entry: &CatalogEntry) -> Result<()> {
        let title = entry.title.get(self.language);
        let kind = entry.entry_type.as_str().to_title_case();
        let price = self.format_price(entry);
        let place = self.format_place(entry);

        writeln!(self.out, "{title} [{kind}] ({id})", id = entry.id)?;
        writeln!(self.out, "    {place} · {price}")?;
        Ok(())
    }

    pub fn print_details(&mut self, entry: &CatalogEntry) -> Result<()> {
        let labels = self.labels();
        let level = entry.level
            .map_or_else(|| labels.any_level.to_string(), |level| level.as_str().to_title_case());

        self.print_summary(entry)?;
        writeln!(self.out)?;
        self.print_rich_text(entry.description.get(self.language))?;
        writeln!(self.out)?;
        writeln!(self.out, "{}: {}", labels.provider, entry.provider)?;
        writeln!(self.out, "{}: {level}", labels.level)?;
        if let Some(duration) = entry.duration {
            writeln!(self.out, "{}: {duration}", labels.duration)?;
        }
        if !entry.tags.is_empty() {
            writeln!(self.out, "#{}", entry.tags.join(" #"))?;
        }
        Ok(())
    }

    pub fn print_locations(&mut self, locations: &BTreeSet<&str>) -> Result<()> {
        let heading = self.labels().location;
        writeln!(self.out, "{heading}:")?;
        for location in locations {
            writeln!(self.out, "  {location}")?;
        }
        Ok(())
    }

    pub fn print_levels(&mut self, levels: &BTreeSet<Level>) -> Result<()> {
        let heading = self.labels().level;
        writeln!(self.out, "{heading}:")?;
        for level in levels {
            writeln!(self.out, "  {level}")?;
        }
        Ok(())
    }

    pub fn print_language(&mut self, language: Language) -> Result<()> {
        let heading = self.labels().language;
        writeln!(self.out, "{heading}: {} ({})", language.display_name(), language.code())?;
        Ok(())
    }

    fn print_rich_text(&mut self, text: &str) -> Result<()> {
        for Span { text, bold } in rich_text::parse(text) {
            if bold && self.styled {
                write!(self.out, "{BOLD_START}{text}{BOLD_END}")?;
            } else {
                write!(self.out, "{text}")?;
            }
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn format_price(&self, entry: &CatalogEntry) -> String {
        let labels = self.labels();
        match entry.price {
            Some(0) => labels.free.to_string(),
            Some(euros) => format!("€{euros}"),
            None => labels.price_unknown.to_string(),
        }
    }

    fn format_place(&self, entry: &CatalogEntry) -> String {
        let labels = self.labels();
        match (entry.location, entry.online) {
            (Some(location), true) => format!("{location}, {}", labels.online),
            (Some(location), false) => location.to_string(),
            (None, _) => labels.online.to_string(),
        }
    }
}
