use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SkillError>;

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("Skill directory '{}' already exists.", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Skill path '{}' does not exist or is not a directory.", .path.display())]
    NotFound { path: PathBuf },

    #[error("SKILL.md not found in '{}'.", .path.display())]
    MissingManifest { path: PathBuf },

    #[error("Invalid skill name '{name}'.")]
    InvalidName { name: String },

    #[error("I/O error at '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk skill directory")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to write archive")]
    Archive(#[from] zip::result::ZipError),
}

impl SkillError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SkillError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Attaches the offending path to raw `std::io` results.
pub(crate) trait IoResultExt<T> {
    fn at(self, path: &std::path::Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn at(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| SkillError::io(path, e))
    }
}
