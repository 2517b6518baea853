use std::fs::{self, File};
use std::io::{self, Seek, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::{ARCHIVE_EXTENSION, has_manifest};
use crate::error::{IoResultExt, Result, SkillError};

/// Zips every file under `skill_path` into `dist_root/<name>.skill`,
/// replacing any previous archive. Returns the archive path.
pub fn package(skill_path: &Path, dist_root: &Path) -> Result<PathBuf> {
    if !skill_path.is_dir() {
        return Err(SkillError::NotFound {
            path: skill_path.to_path_buf(),
        });
    }

    if !has_manifest(skill_path) {
        return Err(SkillError::MissingManifest {
            path: skill_path.to_path_buf(),
        });
    }

    let name = skill_name(skill_path)?;
    fs::create_dir_all(dist_root).at(dist_root)?;
    let archive_path = dist_root.join(format!("{name}.{ARCHIVE_EXTENSION}"));

    let mut files = list_files(skill_path)?;
    if let Some(own) = archive_inside(skill_path, &archive_path) {
        files.retain(|rel| *rel != own);
    }

    let file = File::create(&archive_path).at(&archive_path)?;
    let mut zip = ZipWriter::new(file);
    write_entries(&mut zip, skill_path, &files)?;
    zip.finish()?;

    tracing::info!(
        name = %name,
        entries = files.len(),
        path = %archive_path.display(),
        "Skill packaged"
    );

    Ok(archive_path)
}

/// Every file under `root`, relative to it. Symlinked files are included as
/// ordinary files; symlinked directories are not descended. Entries are sorted
/// by name within each directory.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let is_file = if entry.path_is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(metadata) => metadata.is_file(),
                Err(e) => {
                    tracing::warn!(path = %entry.path().display(), "Skipping broken symlink: {}", e);
                    false
                }
            }
        } else {
            entry.file_type().is_file()
        };
        if !is_file {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(root) {
            files.push(rel.to_path_buf());
        }
    }

    Ok(files)
}

pub fn write_entries<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    root: &Path,
    relative_paths: &[PathBuf],
) -> Result<()> {
    for rel in relative_paths {
        let path = root.join(rel);
        let options = entry_options(&path)?;

        zip.start_file(entry_name(rel), options)?;
        let mut file = File::open(&path).at(&path)?;
        io::copy(&mut file, zip).at(&path)?;

        tracing::trace!(entry = %rel.display(), "Added archive entry");
    }

    Ok(())
}

fn entry_name(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn entry_options(path: &Path) -> Result<FileOptions> {
    let metadata = fs::metadata(path).at(path)?;
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .large_file(needs_zip64(metadata.len()));

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode())
    };

    Ok(options)
}

fn needs_zip64(len: u64) -> bool {
    len >= u64::from(u32::MAX)
}

fn skill_name(skill_path: &Path) -> Result<String> {
    if let Some(name) = skill_path.file_name() {
        return Ok(name.to_string_lossy().into_owned());
    }

    // `.` or a path ending in `..`
    let canonical = skill_path.canonicalize().at(skill_path)?;
    Ok(canonical
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "skill".to_string()))
}

/// Path of the archive relative to the skill directory, when `dist_root`
/// sits inside it.
fn archive_inside(skill_path: &Path, archive_path: &Path) -> Option<PathBuf> {
    let skill = skill_path.canonicalize().ok()?;
    let dist = archive_path.parent()?.canonicalize().ok()?;
    let rel = dist.strip_prefix(&skill).ok()?;
    Some(rel.join(archive_path.file_name()?))
}
