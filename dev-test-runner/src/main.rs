//! Golden-file runner: every `<name>.yaml` under the fixture directory is
//! generated with default options and compared to `<name>.go` next to it.
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use yaml_osi::{generate, parse_documents, Options};

#[derive(Parser, Debug)]
struct Args {
    /// directory holding `*.yaml` fixtures and their expected `*.go` output
    #[arg(default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures"))]
    fixtures: PathBuf,

    /// rewrite expected files from current output instead of comparing
    #[arg(long)]
    bless: bool,
}

enum Outcome {
    Pass,
    Blessed,
    Fail { expected: String, actual: String },
}

fn run_fixture(yaml_path: &Path, bless: bool) -> Result<Outcome> {
    let source = std::fs::read_to_string(yaml_path)
        .with_context(|| format!("reading {}", yaml_path.display()))?;
    let docs = parse_documents(&source)
        .with_context(|| format!("parsing {}", yaml_path.display()))?;
    let actual = generate(&docs, &Options::default());

    let expected_path = yaml_path.with_extension("go");
    if bless {
        std::fs::write(&expected_path, &actual)
            .with_context(|| format!("writing {}", expected_path.display()))?;
        return Ok(Outcome::Blessed);
    }
    let expected = std::fs::read_to_string(&expected_path)
        .with_context(|| format!("reading {}", expected_path.display()))?;
    if expected == actual {
        Ok(Outcome::Pass)
    } else {
        Ok(Outcome::Fail { expected, actual })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let pattern = args.fixtures.join("*.yaml");
    let mut fixtures = glob::glob(&pattern.to_string_lossy())?
        .collect::<Result<Vec<_>, _>>()?;
    fixtures.sort();
    if fixtures.is_empty() {
        bail!("no fixtures under {}", args.fixtures.display());
    }

    let mut failures = 0usize;
    for path in &fixtures {
        let name = path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
        match run_fixture(path, args.bless)? {
            Outcome::Pass => eprintln!("{} {name}", "✅ pass".green()),
            Outcome::Blessed => eprintln!("{} {name}", "✍️ blessed".yellow()),
            Outcome::Fail { expected, actual } => {
                failures += 1;
                eprintln!("{} {name}", "❌ fail".red().bold());
                eprintln!("--- expected\n{expected}--- actual\n{actual}---");
            }
        }
    }

    eprintln!("{} fixtures, {} failed", fixtures.len(), failures);
    if failures > 0 {
        bail!("{failures} fixture(s) failed");
    }
    Ok(())
}
