//! Command handlers for the `cdict` binary.

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cdict::{Category, Diagnostic, Engine, LoadError, ScanOptions};
use cdict_diagnostic::emitter::{ColorMode, TerminalEmitter};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Catalogue(#[from] LoadError),

    #[error("cannot read '{}': {source}", .path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode spans: {0}")]
    Json(#[from] serde_json::Error),
}

/// How catalogue warnings are shown when the engine is built.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Report {
    Quiet,
    Warn,
    /// Shown as errors.
    Deny,
}

/// Settings shared by every command.
pub struct Session {
    catalogue: Option<PathBuf>,
    color: ColorMode,
}

impl Session {
    pub fn new(catalogue: Option<PathBuf>, color: ColorMode) -> Self {
        Session { catalogue, color }
    }

    /// Build the engine. Catalogue warnings are printed only for a
    /// catalogue named on the command line; `check` reports them always.
    fn engine(&self, report: Report) -> Result<Engine, CliError> {
        let raw = match &self.catalogue {
            Some(path) => cdict_catalog::load_path(path)?,
            None => cdict_catalog::builtin()?,
        };
        let engine = Engine::new(&raw);
        if report != Report::Quiet || self.catalogue.is_some() {
            let mut diagnostics = engine.report();
            if report == Report::Deny {
                diagnostics = diagnostics.into_iter().map(Diagnostic::into_error).collect();
            }
            let mut emitter = self.emitter();
            emitter.emit_all(&diagnostics);
            emitter.emit_summary(&diagnostics);
            emitter.flush()?;
        }
        Ok(engine)
    }

    fn emitter(&self) -> TerminalEmitter<'static, io::Stderr> {
        TerminalEmitter::stderr(self.color, io::stderr().is_terminal())
    }
}

pub struct ClassifyArgs {
    pub json: bool,
    pub significant: bool,
    pub fold_directives: bool,
}

pub fn classify(session: &Session, file: &Path, args: &ClassifyArgs) -> Result<ExitCode, CliError> {
    let source = std::fs::read_to_string(file).map_err(|source| CliError::Source {
        path: file.to_path_buf(),
        source,
    })?;
    let engine = session.engine(Report::Quiet)?.with_options(ScanOptions {
        fold_directives: args.fold_directives,
        keep_whitespace: !args.significant,
        ..ScanOptions::default()
    });
    let classification = engine.classify(&source);

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &classification.records())?;
        writeln!(out)?;
    } else {
        for span in &classification.spans {
            writeln!(
                out,
                "{:>6}..{:<6} {:<20} {:<24} {:?}",
                span.start(),
                span.end(),
                span.kind,
                span.entry_id().unwrap_or("-"),
                span.text(&source),
            )?;
        }
    }
    out.flush()?;

    emit_with_source(session, file, &source, &classification.diagnostics)?;
    Ok(ExitCode::SUCCESS)
}

pub fn lookup(
    session: &Session,
    spelling: &str,
    category: Option<Category>,
) -> Result<ExitCode, CliError> {
    let engine = session.engine(Report::Quiet)?;
    let found = match category {
        Some(category) => engine.lookup_in(category, spelling),
        None => engine.lookup(spelling),
    };
    let Some(entry) = found else {
        eprintln!("no entry for `{spelling}`");
        return Ok(ExitCode::FAILURE);
    };

    let mut out = io::stdout().lock();
    writeln!(out, "{entry}")?;
    writeln!(out, "  {}", entry.description())?;
    if let Some(example) = entry.example() {
        writeln!(out, "  example:")?;
        for line in example.lines() {
            writeln!(out, "    {line}")?;
        }
    }
    if !entry.aliases().is_empty() {
        let spellings: Vec<&str> = entry.aliases().iter().map(|a| a.spelling.as_str()).collect();
        writeln!(out, "  also spelled: {}", spellings.join(", "))?;
    }
    Ok(ExitCode::SUCCESS)
}

pub fn check(session: &Session, deny_warnings: bool) -> Result<ExitCode, CliError> {
    let report = if deny_warnings {
        Report::Deny
    } else {
        Report::Warn
    };
    let engine = session.engine(report)?;
    let snapshot = engine.snapshot();
    let catalogue = snapshot.index().catalogue();
    let mut out = io::stdout().lock();
    for category in Category::ALL {
        writeln!(
            out,
            "{category}: {} entries",
            catalogue.of_category(category).count()
        )?;
    }
    writeln!(out, "{} warnings", snapshot.issues().len())?;

    if deny_warnings && !snapshot.issues().is_empty() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn emit_with_source(
    session: &Session,
    file: &Path,
    source: &str,
    diagnostics: &[Diagnostic],
) -> Result<(), CliError> {
    if diagnostics.is_empty() {
        return Ok(());
    }
    let path = file.display().to_string();
    let mut emitter = TerminalEmitter::stderr(session.color, io::stderr().is_terminal())
        .with_source(&path, source);
    emitter.emit_all(diagnostics);
    emitter.emit_summary(diagnostics);
    emitter.flush()?;
    Ok(())
}
