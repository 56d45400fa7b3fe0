//! Command-line front end for the people directory.
//!
//! # Responsibility
//! - Render a location against a JSON record file as plain text.
//! - Print the location a filter or sort action leads to.

mod render;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use peoplebook_core::view::transition;
use peoplebook_core::{
    default_log_level, init_logging, init_stderr_logging, JsonFilePeopleSource, Location,
    PeoplePageService, SearchParams, Sex, SortField,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "peoplebook")]
#[command(version)]
#[command(about = "Browse a people directory by URL-encoded filters", long_about = None)]
struct Cli {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; logs go to stderr otherwise.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// JSON array of person records, required by `view`
    #[arg(long, global = true)]
    people: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page for a location, e.g. `/people/anna?sex=f&sort=born`
    View(ViewArgs),
    /// Replace the text filter
    Query { location: String, text: String },
    /// Set the sex filter: all|m|f
    Sex { location: String, sex: String },
    /// Toggle one century
    Century { location: String, century: i32 },
    /// Clear every century selection
    AllCenturies { location: String },
    /// Activate a column header: name|sex|born|died
    Sort { location: String, field: String },
    /// Clear every filter and sort parameter
    Reset { location: String },
}

#[derive(Args)]
struct ViewArgs {
    /// Location to render
    #[arg(default_value = "/people")]
    location: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    start_logging(&cli)?;

    match cli.command {
        Commands::View(args) => {
            let Some(people) = cli.people.as_deref() else {
                bail!("`view` needs --people <file>");
            };
            view(people, &args.location)
        }
        Commands::Query { location, text } => {
            print_next(&location, |params| transition::set_query(params, &text))
        }
        Commands::Sex { location, sex } => {
            let sex = match sex.trim() {
                "all" | "" => None,
                value => match Sex::parse(value) {
                    Some(sex) => Some(sex),
                    None => bail!("unknown sex `{value}`; expected all|m|f"),
                },
            };
            print_next(&location, |params| transition::set_sex(params, sex))
        }
        Commands::Century { location, century } => {
            print_next(&location, |params| transition::toggle_century(params, century))
        }
        Commands::AllCenturies { location } => print_next(&location, transition::clear_centuries),
        Commands::Sort { location, field } => {
            let Some(field) = SortField::parse(field.trim()) else {
                bail!("unknown sort field `{field}`; expected name|sex|born|died");
            };
            print_next(&location, |params| transition::sort_by(params, field))
        }
        Commands::Reset { location } => print_next(&location, transition::reset_filters),
    }
}

fn start_logging(cli: &Cli) -> Result<()> {
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    match cli.log_dir.as_deref() {
        Some(dir) => init_logging(level, dir),
        None => init_stderr_logging(level),
    }
    .context("logging setup failed")
}

fn view(people: &Path, location: &str) -> Result<()> {
    let location = Location::parse(location.trim());
    let mut service = PeoplePageService::new(JsonFilePeopleSource::new(people));
    service.mount();
    info!(
        "event=cli_view module=cli status=ok loaded={}",
        service.session().people().is_some()
    );

    print!("{}", render::render_app_view(&service.view(&location)));
    service.unmount();
    Ok(())
}

fn print_next(location: &str, f: impl FnOnce(&SearchParams) -> SearchParams) -> Result<()> {
    let location = Location::parse(location.trim());
    let next = location.with_params(f(&location.params));
    println!("{next}");
    Ok(())
}
