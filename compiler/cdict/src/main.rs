//! `cdict` command-line interface.
//!
//! Classifies C source files and looks tokens up against the built-in C
//! dictionary or a catalogue given with `--catalogue`.

use std::path::PathBuf;
use std::process::ExitCode;

use cdict::Category;
use cdict_diagnostic::emitter::ColorMode;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;

/// C token dictionary
#[derive(Debug, Parser)]
#[command(name = "cdict")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Catalogue JSON to use instead of the built-in C dictionary
    #[arg(long, global = true, value_name = "PATH")]
    catalogue: Option<PathBuf>,

    /// When to color diagnostics
    #[arg(long, global = true, value_enum, default_value_t = Color::Auto)]
    color: Color,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify every span of a C source file
    Classify {
        /// Source file to classify
        file: PathBuf,

        /// Print spans as JSON records
        #[arg(long)]
        json: bool,

        /// Leave out whitespace spans
        #[arg(long)]
        significant: bool,

        /// Classify directive lines token by token
        #[arg(long)]
        no_fold_directives: bool,
    },

    /// Look a token spelling up
    Lookup {
        /// Spelling to look up, e.g. `sizeof` or `<<=`
        spelling: String,

        /// Only search this category
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },

    /// Normalize the catalogue and report its defects
    Check {
        /// Exit with failure if there are any warnings
        #[arg(long)]
        deny_warnings: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Color {
    Auto,
    Always,
    Never,
}

impl From<Color> for ColorMode {
    fn from(color: Color) -> Self {
        match color {
            Color::Auto => ColorMode::Auto,
            Color::Always => ColorMode::Always,
            Color::Never => ColorMode::Never,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CategoryArg {
    Keyword,
    Operator,
    Identifier,
}

impl From<CategoryArg> for Category {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Keyword => Category::Keyword,
            CategoryArg::Operator => Category::Operator,
            CategoryArg::Identifier => Category::Identifier,
        }
    }
}

fn main() -> ExitCode {
    cdict::init_tracing();
    let cli = Cli::parse();
    let session = commands::Session::new(cli.catalogue, cli.color.into());

    let result = match cli.command {
        Command::Classify {
            file,
            json,
            significant,
            no_fold_directives,
        } => commands::classify(
            &session,
            &file,
            &commands::ClassifyArgs {
                json,
                significant,
                fold_directives: !no_fold_directives,
            },
        ),
        Command::Lookup { spelling, category } => {
            commands::lookup(&session, &spelling, category.map(Category::from))
        }
        Command::Check { deny_warnings } => commands::check(&session, deny_warnings),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
