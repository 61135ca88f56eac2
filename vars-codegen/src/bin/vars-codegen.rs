/// CLI: reads a variable schema, prints Rust lookup-table arms to stdout.
///
/// Usage:
///   vars-codegen                          # reads ./vars.json
///   vars-codegen vars.json > arms.rs
///   vars-codegen --strict --audit vars.json
///   vars-codegen vars.json --splice src/utils/variable_data.rs --index taxon --in-place
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vars_codegen::{splice::splice, Mode, Settings};

#[derive(Parser, Debug)]
#[command(name = "vars-codegen", version, about)]
struct Cli {
    /// Variable schema with a top-level `fields` object
    #[arg(default_value = "vars.json")]
    schema: PathBuf,

    /// Skip fields missing `name`, `display_name`, `type` or keyword `constraint.enum`
    #[arg(long)]
    strict: bool,

    /// Summary functions a field must list to get `Function::Some(..)`
    #[arg(long, value_delimiter = ',')]
    functions: Option<Vec<String>>,

    /// JSON settings file (`{"mode": "strict", "functions": ["min", "max"]}`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rust template to splice the arms into; the result is printed
    #[arg(long)]
    splice: Option<PathBuf>,

    /// Marker suffix, e.g. `taxon` for `// automated input start taxon`
    #[arg(long, requires = "splice")]
    index: Option<String>,

    /// Rewrite the `--splice` template instead of printing it
    #[arg(long, requires = "splice")]
    in_place: bool,

    /// Print one line per skipped field to stderr
    #[arg(long)]
    audit: bool,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if self.strict {
            settings.mode = Mode::Strict;
        }
        if let Some(functions) = &self.functions {
            settings.functions = functions.clone();
        }
        settings.validate()?;
        Ok(settings)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let settings = cli.settings()?;

    let json = std::fs::read_to_string(&cli.schema)
        .with_context(|| format!("cannot read {}", cli.schema.display()))?;
    let generated = vars_codegen::generate_str(&json, &settings)
        .with_context(|| format!("cannot generate from {}", cli.schema.display()))?;

    for diagnostic in &generated.diagnostics {
        eprintln!("{diagnostic}");
    }
    if cli.audit {
        for (id, reason) in &generated.skipped {
            eprintln!("skipped {id}: {reason}");
        }
    }

    let output = match &cli.splice {
        Some(path) => {
            let template = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read template {}", path.display()))?;
            let index = cli.index.as_deref().unwrap_or("");
            let spliced = splice(&template, index, &generated.lines)
                .with_context(|| format!("cannot splice into {}", path.display()))?;
            if cli.in_place {
                std::fs::write(path, spliced)
                    .with_context(|| format!("cannot write {}", path.display()))?;
                tracing::info!(path = %path.display(), lines = generated.lines.len(), "template updated");
                return Ok(());
            }
            spliced
        }
        None => generated.render(),
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(output.as_bytes()) {
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            bail!("cannot write output: {e}");
        }
    }
    Ok(())
}
