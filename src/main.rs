use clap::{Parser, Subcommand};
use mdpress::{config, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdpress")]
#[command(about = "Static article builder for content sites")]
#[command(long_about = "\
Static article builder for content sites

A single JSON config file declares every article: where its markdown lives,
where its HTML goes, and all the metadata the page needs (SEO tags, sidebar
links, structured data). Building converts each published article into a
complete standalone HTML document.

Config structure:

  content.config.json
  ├── siteUrl / siteName / author   # Site-wide identity
  ├── outputDir                     # Build output root
  └── articles[]                    # One entry per article
      ├── mdSource → htmlOutput     # File mapping
      ├── title, description, url   # Page metadata
      ├── sidebar, tocLevel, ...    # Navigation options
      └── faqSchema                 # Optional FAQ structured data

Markdown files carry only content; every other fact about a page lives in
the config, so the whole site inventory is one reviewable file.")]
#[command(version)]
struct Cli {
    /// Site config file
    #[arg(long, default_value = "content.config.json", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build articles into HTML
    Build {
        /// Build a single article by id (published or not)
        #[arg(long)]
        id: Option<String>,
    },
    /// List all configured articles
    List,
    /// Show what a build would write, without writing
    DryRun,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !cli.config.exists() {
        return Err(format!(
            "config file not found: {} (pass --config to point at your site config)",
            cli.config.display()
        )
        .into());
    }
    let site = config::load(&cli.config)?;

    match cli.command {
        Command::Build { id } => match id {
            Some(id) => {
                let report = generate::build_by_id(&site, &id)?;
                output::print_build_output(std::slice::from_ref(&report));
            }
            None => {
                let reports = generate::build_published(&site)?;
                output::print_build_output(&reports);
            }
        },
        Command::List => output::print_list_output(&site),
        Command::DryRun => output::print_dry_run_output(&site),
    }

    Ok(())
}
