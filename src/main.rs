use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;

use cli::{BuildArgs, Cli, Command, KeywordsArgs};
use doctags::{
    ExcludeList,
    Registry,
    catalog::Catalog,
    config::Settings,
    error::{self, Error},
    report,
};

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("DOCTAGS_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Build(args) => cmd_build(&args)?,
        Command::Keywords(args) => cmd_keywords(&args)?,
        Command::Completions(args) => args.generate(),
    }

    Ok(())
}

fn cmd_build(args: &BuildArgs) -> error::Result<()> {
    let settings =
        Settings::resolve(args.catalog.as_deref(), args.non_words.as_deref());
    let catalog = Catalog::from_path(settings.catalog()?)?;

    let mut registry = Registry::new();
    if let Some(words) = settings.non_words() {
        registry.add_non_words(words);
    }
    let rejected = catalog.load_into(&mut registry);

    let mut stdout = std::io::stdout().lock();
    if args.json {
        report::format_json(&mut stdout, registry.projects())?;
    } else {
        report::format_human(&mut stdout, registry.projects())?;
    }

    if args.strict && !rejected.is_empty() {
        return Err(Error::Rejected {
            count: rejected.len(),
        });
    }
    Ok(())
}

fn cmd_keywords(args: &KeywordsArgs) -> error::Result<()> {
    let settings = Settings::resolve(None, args.non_words.as_deref());

    let mut registry = Registry::new();
    if let Some(words) = settings.non_words() {
        registry.add_non_words(words);
    }
    let keywords = registry.keywords(
        &args.text,
        &ExcludeList::from_comma_separated(&args.exclude),
    );

    let mut stdout = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer(&mut stdout, &keywords)?;
        writeln!(stdout)?;
    } else {
        report::format_keywords(&mut stdout, &keywords)?;
    }
    Ok(())
}
