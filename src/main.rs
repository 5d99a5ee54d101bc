mod application;
mod cli;
mod prelude;
mod printer;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    application::Application::new(cli)?.activate()
}
