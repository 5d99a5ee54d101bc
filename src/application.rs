use std::io::IsTerminal;

use newcomer_guide::facets;
use newcomer_guide::{Config, FilePreferenceStore};

use super::cli::{Cli, Command};
use super::prelude::*;
use super::printer::Printer;

struct ApplicationState {
    config: Config,
    repository: Repository<'static>
}

pub struct Application {
    cli: Cli,
    state: ApplicationState,
}

impl Application {

    pub fn new(cli: Cli) -> Result<Self> {
        newcomer_guide::observability::init(cli.verbose);

        let config = Config::load(cli.config.as_deref())
            .context("Failed to load configuration")?;
        let repository = Repository::bundled();

        tracing::debug!(entries = repository.len(), "catalog ready");

        Ok(Self {
            cli,
            state: ApplicationState { config, repository }
        })
    }

    fn open_preferences(&self) -> Result<FilePreferenceStore> {
        FilePreferenceStore::open(
            &self.state.config.preferences_path,
            self.state.config.default_language
        ).context("Failed to open language preferences")
    }

    // An explicit --lang wins; a broken preference file only costs the
    // saved choice, not the listing.
    fn display_language(&self) -> Language {
        if let Some(language) = self.cli.lang {
            return language;
        }

        match self.open_preferences() {
            Ok(store) => store.language(),
            Err(error) => {
                tracing::warn!(error = %error, "using default language");
                self.state.config.default_language
            }
        }
    }

    fn printer(language: Language) -> Printer<std::io::StdoutLock<'static>> {
        let stdout = std::io::stdout();
        let styled = stdout.is_terminal();
        Printer::new(stdout.lock(), language, styled)
    }

    // A preference file that no longer parses is replaced rather than
    // blocking the user from picking a language again.
    fn save_language(&self, language: Language) -> Result<()> {
        match self.open_preferences() {
            Ok(mut store) => store.set_language(language)
                .context("Failed to save language preference"),
            Err(error) => {
                tracing::warn!(error = %error, "replacing unreadable preference file");
                FilePreferenceStore::create(&self.state.config.preferences_path, language)
                    .map(|_| ())
                    .context("Failed to save language preference")
            }
        }
    }

    fn run_command(&self) -> Result<()> {
        if let Command::Language { language: Some(language) } = &self.cli.command {
            self.save_language(*language)?;
            return Self::printer(*language).print_language(*language);
        }

        let language = self.display_language();
        let mut printer = Self::printer(language);

        match &self.cli.command {
            Command::List(args) => {
                let engine = FilterEngine::new(self.state.repository);
                let results = engine.filter(&args.to_criteria(), language);
                printer.print_entries(&results)
            }
            Command::Show { id } => {
                let Some(entry) = self.state.repository.entry(id) else {
                    bail!("No catalog entry with id '{id}'");
                };
                printer.print_details(entry)
            }
            Command::Locations => {
                let locations = facets::locations(self.state.repository.entries());
                printer.print_locations(&locations)
            }
            Command::Levels => {
                let levels = facets::levels(self.state.repository.entries());
                printer.print_levels(&levels)
            }
            Command::Language { .. } => printer.print_language(language),
        }
    }

    pub fn activate(&self) -> Result<()> {
        self.run_command()
    }

}
