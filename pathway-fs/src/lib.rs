//! UTF-8 file helpers built on `cap-std` and `camino`.
//!
//! Every operation opens the directory holding its target with ambient
//! authority and then works relative to that capability, so callers pass
//! plain [`Utf8Path`]s while the actual IO stays capability-scoped.
#![forbid(unsafe_code)]

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Read the whole file at `path` into a string.
///
/// # Errors
/// Returns any IO error from opening the parent directory or reading the
/// file, including [`io::ErrorKind::NotFound`].
pub fn read_to_string(path: &Utf8Path) -> io::Result<String> {
    let (dir, name) = open_parent(path)?;
    dir.read_to_string(name.as_str())
}

/// Write `contents` to `path`, creating missing parent directories and
/// replacing any existing file.
///
/// # Errors
/// Returns any IO error from creating directories or writing the file.
pub fn write_string(path: &Utf8Path, contents: &str) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_parent(path)?;
    dir.write(name.as_str(), contents)
}

/// Ensure the parent directory of `path` exists.
///
/// # Errors
/// Returns any IO error from opening the base directory or creating the
/// missing components.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    let (base, relative) = anchor_and_relative(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&relative)
}

/// Report whether `path` is a regular file.
///
/// Directories and other non-file entries yield `Ok(false)`.
///
/// # Errors
/// Returns [`io::ErrorKind::NotFound`] when `path` or its parent is missing,
/// and any other IO error raised while inspecting it.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_parent(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

fn open_parent(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, format!("{path} has no file name")))?
        .to_owned();
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new(""));
    let (base, relative) = anchor_and_relative(parent)?;
    if relative.as_str().is_empty() {
        Ok((base, name))
    } else {
        Ok((base.open_dir(&relative)?, name))
    }
}

/// Split `dir` into an ambient anchor (root, drive prefix, or leading `.` and
/// `..` components) and the remainder below it.
fn anchor_and_relative(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let mut anchor = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in dir.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir => anchor.push(component),
            Utf8Component::CurDir | Utf8Component::ParentDir
                if relative.as_str().is_empty() =>
            {
                anchor.push(component);
            }
            _ => relative.push(component),
        }
    }
    if anchor.as_str().is_empty() {
        anchor.push(".");
    }
    let base = fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?;
    Ok((base, relative))
}
