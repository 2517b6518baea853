use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;
use zip::ZipArchive;

fn bin(name: &str, cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin(name).unwrap();
    cmd.current_dir(cwd)
        .env_remove("SKILLKIT_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE")
        .env("CLICOLOR", "0");
    cmd
}

fn entry_names(archive: &Path) -> Vec<String> {
    let zip = ZipArchive::new(File::open(archive).unwrap()).unwrap();
    let mut names: Vec<String> = zip.file_names().map(str::to_string).collect();
    names.sort();
    names
}

#[test]
fn init_then_package_end_to_end() {
    let tmp = TempDir::new().unwrap();

    bin("init-skill", tmp.path())
        .arg("pdf-tools")
        .assert()
        .success()
        .stdout("Skill 'pdf-tools' initialized at skills/pdf-tools\n");

    let skill_dir = tmp.path().join("skills").join("pdf-tools");
    for dir in ["scripts", "references", "assets"] {
        assert!(skill_dir.join(dir).is_dir());
    }
    let manifest = fs::read_to_string(skill_dir.join("SKILL.md")).unwrap();
    assert!(manifest.contains("\nname: pdf-tools\n"));
    assert!(manifest.contains("\n# Pdf Tools\n"));

    bin("package-skill", tmp.path())
        .arg("skills/pdf-tools")
        .assert()
        .success()
        .stdout("Skill 'pdf-tools' packaged at dist/pdf-tools.skill\n");

    let archive = tmp.path().join("dist").join("pdf-tools.skill");
    assert_eq!(entry_names(&archive), vec!["SKILL.md"]);

    let mut zip = ZipArchive::new(File::open(&archive).unwrap()).unwrap();
    let mut stored = String::new();
    zip.by_name("SKILL.md")
        .unwrap()
        .read_to_string(&mut stored)
        .unwrap();
    assert_eq!(stored, manifest);
}

#[test]
fn init_twice_fails_with_exit_one() {
    let tmp = TempDir::new().unwrap();

    bin("init-skill", tmp.path())
        .args(["alpha", "--path", "out"])
        .assert()
        .success()
        .stdout("Skill 'alpha' initialized at out/alpha\n");

    bin("init-skill", tmp.path())
        .args(["alpha", "--path", "out"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "Error: Skill directory 'out/alpha' already exists.",
        ));
}

#[test]
fn package_missing_path() {
    let tmp = TempDir::new().unwrap();

    bin("package-skill", tmp.path())
        .arg("missing")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Skill path 'missing' does not exist or is not a directory.",
        ));

    assert!(!tmp.path().join("dist").exists());
}

#[test]
fn package_without_manifest() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("bare").join("scripts")).unwrap();

    bin("package-skill", tmp.path())
        .arg("bare")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: SKILL.md not found in 'bare'.",
        ));
}

#[test]
fn package_to_explicit_dist() {
    let tmp = TempDir::new().unwrap();
    let skill_dir = tmp.path().join("notes");
    fs::create_dir_all(skill_dir.join("references")).unwrap();
    fs::write(skill_dir.join("SKILL.md"), "---\nname: notes\n---\n").unwrap();
    fs::write(skill_dir.join("references").join("guide.md"), "# Guide\n").unwrap();

    bin("package-skill", tmp.path())
        .args(["notes", "build/out"])
        .assert()
        .success()
        .stdout("Skill 'notes' packaged at build/out/notes.skill\n");

    assert_eq!(
        entry_names(&tmp.path().join("build/out/notes.skill")),
        vec!["SKILL.md", "references/guide.md"]
    );
}

#[test]
fn config_file_supplies_default_dirs() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("skillkit.toml"),
        "skills_dir = \"agent-skills\"\ndist_dir = \"packages\"\n",
    )
    .unwrap();

    bin("init-skill", tmp.path())
        .arg("beta")
        .assert()
        .success()
        .stdout("Skill 'beta' initialized at agent-skills/beta\n");

    bin("package-skill", tmp.path())
        .arg("agent-skills/beta")
        .assert()
        .success()
        .stdout("Skill 'beta' packaged at packages/beta.skill\n");
}

#[test]
fn explicit_path_overrides_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("skillkit.toml"), "skills_dir = \"ignored\"\n").unwrap();

    bin("init-skill", tmp.path())
        .args(["gamma", "--path", "chosen"])
        .assert()
        .success();

    assert!(tmp.path().join("chosen/gamma/SKILL.md").is_file());
    assert!(!tmp.path().join("ignored").exists());
}

#[test]
fn combined_binary_subcommands() {
    let tmp = TempDir::new().unwrap();

    bin("skillkit", tmp.path())
        .args(["init", "web-scraper", "--path", "src-skills"])
        .assert()
        .success()
        .stdout("Skill 'web-scraper' initialized at src-skills/web-scraper\n");

    bin("skillkit", tmp.path())
        .args(["package", "src-skills/web-scraper", "pkgs"])
        .assert()
        .success()
        .stdout("Skill 'web-scraper' packaged at pkgs/web-scraper.skill\n");

    assert!(tmp.path().join("pkgs/web-scraper.skill").is_file());
}

#[test]
fn logs_stay_off_stdout() {
    let tmp = TempDir::new().unwrap();

    bin("init-skill", tmp.path())
        .args(["-vv", "delta"])
        .assert()
        .success()
        .stdout("Skill 'delta' initialized at skills/delta\n")
        .stderr(predicate::str::contains("Skill initialized"));
}

#[test]
fn dot_prefixed_paths_are_reported_clean() {
    let tmp = TempDir::new().unwrap();

    bin("init-skill", tmp.path())
        .args(["pdf-tools", "--path", "./skills/"])
        .assert()
        .success()
        .stdout("Skill 'pdf-tools' initialized at skills/pdf-tools\n");

    bin("package-skill", tmp.path())
        .args(["./skills/pdf-tools", "./dist/"])
        .assert()
        .success()
        .stdout("Skill 'pdf-tools' packaged at dist/pdf-tools.skill\n");

    assert!(tmp.path().join("dist/pdf-tools.skill").is_file());
}
