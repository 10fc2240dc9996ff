use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use colored::Colorize;
use miette::Diagnostic;
use pop::{config::Fixture, errors::FixtureError, preview::preview_as_tree, PopError};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error, Diagnostic)]
enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Generate(#[from] PopError),
}

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Creates the directories and files described by a fixture")
                .arg(
                    Arg::new("fixture")
                        .help("TOML file describing the tree")
                        .required(true),
                )
                .arg(
                    Arg::new("root")
                        .help("Directory to generate into; a fresh temporary one by default")
                        .short('r')
                        .long("root"),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Prints the tree described by a fixture without touching the disk")
                .arg(
                    Arg::new("fixture")
                        .help("TOML file describing the tree")
                        .required(true),
                ),
        )
        .subcommand_required(true)
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("generate", args)) => handle_generate(args)?,
        Some(("preview", args)) => handle_preview(args)?,
        _ => unreachable!(),
    }

    Ok(())
}

fn init_logging(is_verbose: bool) {
    let level = if is_verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_fixture(args: &ArgMatches) -> Result<Fixture, CliError> {
    let path = args
        .get_one::<String>("fixture")
        .expect("fixture required");

    Ok(Fixture::from_file(path)?)
}

fn handle_generate(args: &ArgMatches) -> Result<(), CliError> {
    let fixture = load_fixture(args)?;

    let root = match args.get_one::<String>("root") {
        Some(root) => {
            let root = PathBuf::from(root);
            pop::generate_at(&root, fixture.tree())?;
            root
        }
        None => pop::generate(fixture.tree())?,
    };

    preview_as_tree(fixture.tree(), &root.display().to_string());

    println!("\n{} {}", "generated".green(), root.display());

    Ok(())
}

fn handle_preview(args: &ArgMatches) -> Result<(), CliError> {
    let fixture = load_fixture(args)?;

    let label = args
        .get_one::<String>("fixture")
        .expect("fixture required");

    preview_as_tree(fixture.tree(), label);

    Ok(())
}
