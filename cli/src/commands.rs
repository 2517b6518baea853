use anyhow::Result;
use clap::Args;
use skillkit_core::{Config, initialize, package};
use std::path::{Component, Path, PathBuf};

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Name of the skill
    pub name: String,

    /// Path to create the skill directory in [default: skills]
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct PackageArgs {
    /// Path to the skill directory
    pub path: PathBuf,

    /// Output directory for the .skill file [default: dist]
    pub dist: Option<PathBuf>,
}

pub fn run_init(args: &InitArgs) -> Result<()> {
    let output_root = match &args.path {
        Some(path) => path.clone(),
        None => Config::load_or_default()?.skills_dir,
    };

    let skill_dir = initialize(&args.name, &output_root)?;
    println!(
        "Skill '{}' initialized at {}",
        args.name,
        display_path(&skill_dir).display()
    );

    Ok(())
}

pub fn run_package(args: &PackageArgs) -> Result<()> {
    let dist_root = match &args.dist {
        Some(dist) => dist.clone(),
        None => Config::load_or_default()?.dist_dir,
    };

    let archive = package(&args.path, &dist_root)?;
    let name = archive
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!(
        "Skill '{}' packaged at {}",
        name,
        display_path(&archive).display()
    );

    Ok(())
}

/// Drops `.` components so `./skills/` reports as `skills/...`.
fn display_path(path: &Path) -> PathBuf {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}
