pub mod init;
pub mod manifest;
pub mod package;

pub use init::initialize;
pub use manifest::{FrontMatter, parse_front_matter, render_manifest, title_case};
pub use package::{list_files, package, write_entries};

use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "SKILL.md";
pub const RESOURCE_DIRS: [&str; 3] = ["scripts", "references", "assets"];
pub const ARCHIVE_EXTENSION: &str = "skill";

pub const DEFAULT_SKILLS_DIR: &str = "skills";
pub const DEFAULT_DIST_DIR: &str = "dist";

pub fn manifest_path(skill_dir: &Path) -> PathBuf {
    skill_dir.join(MANIFEST_FILE)
}

pub fn has_manifest(skill_dir: &Path) -> bool {
    manifest_path(skill_dir).is_file()
}

/// Names are used verbatim as a single path component.
pub fn is_unsafe_skill_name(name: &str) -> bool {
    name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0')
        || name == "."
        || name.trim().is_empty()
}
