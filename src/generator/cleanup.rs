//! Orphan page removal.
//!
//! After a build, every `.html` file directly inside the output directory that
//! was not written by this build is deleted. Subdirectories, other file
//! types (PDFs, images) and protected site files (template, home page) are
//! never touched.

use crate::log;
use anyhow::{Context, Result};
use std::{
    collections::HashSet,
    fs, io,
    path::{Component, Path, PathBuf},
};

/// Lists the regular files directly inside a directory.
pub trait DirLister {
    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>>;
}

/// Lists files from the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirLister for FsLister {
    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }
}

/// `.html` files in `listing` that are not in `generated`, sorted by name.
pub fn find_orphans(listing: &[String], generated: &HashSet<String>) -> Vec<String> {
    let mut orphans: Vec<String> = listing
        .iter()
        .filter(|name| name.ends_with(".html") && !generated.contains(*name))
        .cloned()
        .collect();
    orphans.sort();
    orphans
}

/// Names of the `protected` files that sit directly inside `dir`.
///
/// Paths are compared lexically with `.` components dropped, so
/// `./site/publications/x.html` matches `site/publications`.
pub fn protected_names(dir: &Path, protected: &[PathBuf]) -> HashSet<String> {
    let dir = lexical(dir);
    protected
        .iter()
        .map(|path| lexical(path))
        .filter(|path| path.parent() == Some(dir.as_path()))
        .filter_map(|path| Some(path.file_name()?.to_str()?.to_owned()))
        .collect()
}

fn lexical(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Delete orphan pages from `output_dir`, returning the removed file names.
///
/// Files named in `generated` or listed in `protected` are kept. Stops at the
/// first file that cannot be removed.
pub fn cleanup_orphans(
    output_dir: &Path,
    generated: &HashSet<String>,
    protected: &[PathBuf],
    lister: &dyn DirLister,
) -> Result<Vec<String>> {
    let listing = lister
        .list_files(output_dir)
        .with_context(|| format!("Failed to list {}", output_dir.display()))?;

    let mut keep = protected_names(output_dir, protected);
    keep.extend(generated.iter().cloned());
    let orphans = find_orphans(&listing, &keep);

    for name in &orphans {
        let path = output_dir.join(name);
        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete orphan file {}", path.display()))?;
        log!("clean"; "deleted orphan file: {}", name);
    }

    Ok(orphans)
}
