use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{RESOURCE_DIRS, is_unsafe_skill_name, manifest_path, render_manifest};
use crate::error::{IoResultExt, Result, SkillError};

/// Creates `output_root/name` with the standard layout and a templated
/// `SKILL.md`. Returns the new skill directory.
///
/// An existing entry at the target is never touched. The skill directory is
/// created with `fs::create_dir`, so a concurrent initializer that loses the
/// race also gets `AlreadyExists`.
pub fn initialize(name: &str, output_root: &Path) -> Result<PathBuf> {
    if is_unsafe_skill_name(name) {
        return Err(SkillError::InvalidName {
            name: name.to_string(),
        });
    }

    let skill_dir = output_root.join(name);

    if skill_dir.symlink_metadata().is_ok() {
        return Err(SkillError::AlreadyExists { path: skill_dir });
    }

    fs::create_dir_all(output_root).at(output_root)?;

    match fs::create_dir(&skill_dir) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(SkillError::AlreadyExists { path: skill_dir });
        }
        Err(e) => return Err(SkillError::io(&skill_dir, e)),
    }
    tracing::debug!(path = %skill_dir.display(), "Created skill directory");

    for dir in RESOURCE_DIRS {
        let path = skill_dir.join(dir);
        fs::create_dir(&path).at(&path)?;
    }

    let manifest = manifest_path(&skill_dir);
    fs::write(&manifest, render_manifest(name)).at(&manifest)?;

    tracing::info!(name, path = %skill_dir.display(), "Skill initialized");

    Ok(skill_dir)
}
