//! Rust source validator.
//!
//! Checks conventions that clippy does not enforce:
//! - every `pub` item in library sources carries a doc comment
//! - public error enums derive `thiserror::Error`
//! - library roots carry the workspace `#![deny(...)]` block
//! - no `std::process::exit` in library roots
//! - every member `Cargo.toml` declares `edition` and `license`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "source";

/// Workspace members, relative to the workspace root.
const MEMBERS: &[&str] = &["ontology", "conformance", "clients"];

/// Member library roots that must carry the deny block.
const LIBRARY_ROOTS: &[&str] = &["ontology/src/lib.rs", "conformance/src/lib.rs"];

const DENIED_LINTS: &[&str] = &[
    "clippy::unwrap_used",
    "clippy::expect_used",
    "clippy::panic",
    "missing_docs",
    "clippy::missing_errors_doc",
];

const ITEM_PREFIXES: &[&str] = &[
    "pub fn ",
    "pub const fn ",
    "pub struct ",
    "pub enum ",
    "pub trait ",
    "pub const ",
    "pub type ",
    "pub static ",
];

/// Validates the Rust sources of every workspace member.
///
/// # Errors
///
/// Returns an error if a source file or manifest cannot be read.
pub fn validate(workspace: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let sources = library_sources(workspace);

    check_docs(&sources, &mut report)?;
    check_error_types(&sources, &mut report)?;
    check_library_roots(workspace, &mut report)?;
    check_manifests(workspace, &mut report)?;

    Ok(report)
}

/// Returns every `.rs` file under a member's `src/`, excluding binaries.
fn library_sources(workspace: &Path) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = MEMBERS
        .iter()
        .flat_map(|member| WalkDir::new(workspace.join(member).join("src")).into_iter())
        .filter_map(|e| e.ok())
        .map(walkdir::DirEntry::into_path)
        .filter(|p| p.extension().is_some_and(|x| x == "rs"))
        .filter(|p| !p.components().any(|c| c.as_os_str() == "bin"))
        .collect();
    out.sort();
    out
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Returns the 1-based line numbers of public items with no doc comment.
///
/// Scanning stops at the first `#[cfg(test)]`. Lines inside macro bodies
/// (containing `$`) are skipped.
fn undocumented_items(content: &str) -> Vec<usize> {
    let lines: Vec<&str> = content.lines().collect();
    let mut out = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("#[cfg(test)]") {
            break;
        }
        if trimmed.contains('$') || !ITEM_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
            continue;
        }
        let documented = lines[..i]
            .iter()
            .rev()
            .map(|l| l.trim_start())
            .find(|l| !l.starts_with("#["))
            .is_some_and(|l| l.starts_with("///") || l.starts_with("//!"));
        if !documented {
            out.push(i + 1);
        }
    }
    out
}

fn check_docs(sources: &[PathBuf], report: &mut ConformanceReport) -> Result<()> {
    let mut problems = Vec::new();
    for path in sources {
        for line in undocumented_items(&read(path)?) {
            problems.push(format!("{}:{line}", path.display()));
        }
    }
    report.push(TestResult::check(
        VALIDATOR,
        format!("All public items documented across {} files", sources.len()),
        "Public items without doc comments",
        problems,
    ));
    Ok(())
}

fn check_error_types(sources: &[PathBuf], report: &mut ConformanceReport) -> Result<()> {
    let mut problems = Vec::new();
    for path in sources {
        let content = read(path)?;
        let declares_error = content.lines().any(|l| {
            let l = l.trim_start();
            l.starts_with("pub enum ") && l.contains("Error")
        });
        if declares_error && !content.contains("thiserror::Error") {
            problems.push(format!("{}: error enum without thiserror", path.display()));
        }
    }
    report.push(TestResult::check(
        VALIDATOR,
        "Public error enums derive thiserror::Error",
        "Error enums not derived with thiserror",
        problems,
    ));
    Ok(())
}

fn check_library_roots(workspace: &Path, report: &mut ConformanceReport) -> Result<()> {
    let mut problems = Vec::new();
    for root in LIBRARY_ROOTS {
        let path = workspace.join(root);
        if !path.exists() {
            problems.push(format!("{root}: not found"));
            continue;
        }
        let content = read(&path)?;
        if !content.contains("#![deny(") {
            problems.push(format!("{root}: missing #![deny(...)]"));
        }
        for lint in DENIED_LINTS {
            if !content.contains(lint) {
                problems.push(format!("{root}: does not deny {lint}"));
            }
        }
        if content.contains("process::exit") {
            problems.push(format!("{root}: calls std::process::exit"));
        }
    }
    report.push(TestResult::check(
        VALIDATOR,
        "Library roots deny the workspace lint set and never exit",
        "Library roots break workspace conventions",
        problems,
    ));
    Ok(())
}

fn check_manifests(workspace: &Path, report: &mut ConformanceReport) -> Result<()> {
    let mut problems = Vec::new();
    for member in MEMBERS {
        let path = workspace.join(member).join("Cargo.toml");
        if !path.exists() {
            problems.push(format!("{member}/Cargo.toml: not found"));
            continue;
        }
        let content = read(&path)?;
        if !(content.contains("edition.workspace") || content.contains("edition = \"2021\"")) {
            problems.push(format!("{member}/Cargo.toml: missing edition field"));
        }
        if !(content.contains("license.workspace") || content.contains("license = ")) {
            problems.push(format!("{member}/Cargo.toml: missing license field"));
        }
    }
    report.push(TestResult::check(
        VALIDATOR,
        "All member Cargo.toml files declare edition and license",
        "Cargo.toml files missing required fields",
        problems,
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_between_doc_and_item_are_skipped() {
        let src = "/// Doc.\n#[must_use]\npub fn documented() {}\n\n#[must_use]\npub fn bare() {}\n";
        assert_eq!(undocumented_items(src), vec![6]);
    }

    #[test]
    fn restricted_and_test_items_are_ignored() {
        let src = "pub(crate) fn hidden() {}\n#[cfg(test)]\nmod tests {\n    pub fn helper() {}\n}\n";
        assert!(undocumented_items(src).is_empty());
    }
}
