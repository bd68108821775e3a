//! `hqdm-build` — Serializes the HQDM schema catalogue and writes the
//! artifacts to the output directory.
//!
//! **Outputs:**
//! - `<out>/hqdm.json` — JSON-LD 1.1
//! - `<out>/hqdm.ttl` — Turtle 1.1
//! - `<out>/hqdm.nt` — N-Triples
//!
//! **Usage:**
//! ```text
//! hqdm-build [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use hqdm_ontology::serializer::{jsonld, ntriples, turtle};
use hqdm_ontology::Ontology;
use tracing::info;

/// Build the HQDM schema artifacts.
#[derive(Parser)]
#[command(name = "hqdm-build", about = "Build HQDM schema artifacts")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, env = "HQDM_OUT", default_value = "public")]
    out: PathBuf,
}

fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = content.len(), "artifact written");
    println!("  Written: {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    hqdm_clients::init_tracing();
    let args = Args::parse();
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let ontology = Ontology::hqdm();

    println!(
        "HQDM schema v{}: {} modules, {} classes, {} properties, {} rules",
        ontology.version,
        ontology.modules.len(),
        ontology.class_count(),
        ontology.property_count(),
        ontology.rule_count()
    );

    let json = serde_json::to_string_pretty(&jsonld::schema_to_json_ld(ontology))
        .context("Failed to serialize schema to JSON-LD")?;
    write(&out.join("hqdm.json"), &json)?;
    write(&out.join("hqdm.ttl"), &turtle::schema_to_turtle(ontology))?;
    write(&out.join("hqdm.nt"), &ntriples::schema_to_ntriples(ontology))?;

    println!("Build complete.");
    Ok(())
}
