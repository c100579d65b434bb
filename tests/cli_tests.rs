use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

/// Minimal config plus a log file inside `base`; returns (config, log) paths.
fn write_config(base: &Path, level: &str) -> (PathBuf, PathBuf) {
    let cfg_path = base.join("config.xml");
    let log_path = base.join("logs").join("organizer.log");
    let xml = format!(
        "<config>\n  <log_level>{level}</log_level>\n  <log_file>{}</log_file>\n</config>",
        log_path.display()
    );
    fs::write(&cfg_path, xml).unwrap();
    (cfg_path, log_path)
}

fn run(cfg: &Path, args: &[&OsStr]) -> Output {
    let out = Command::new(assert_cmd::cargo::cargo_bin!("file_organizer"))
        .env_remove("FILE_ORGANIZER_CONFIG")
        .arg("--config")
        .arg(cfg)
        .args(args)
        .output()
        .expect("spawn binary");
    eprintln!("=== STDOUT ===\n{}", String::from_utf8_lossy(&out.stdout));
    eprintln!("=== STDERR ===\n{}", String::from_utf8_lossy(&out.stderr));
    out
}

#[test]
fn organizes_folder_and_writes_log_file() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let (cfg, log) = write_config(&base, "normal");
    let inbox = base.join("inbox");
    fs::create_dir(&inbox).unwrap();
    fs::write(inbox.join("a.JPG"), b"x").unwrap();
    fs::write(inbox.join("b.pdf"), b"x").unwrap();
    fs::write(inbox.join("README"), b"x").unwrap();

    let out = run(&cfg, &[inbox.as_os_str()]);
    assert!(out.status.success(), "binary exited with failure");

    assert!(inbox.join("Images").join("a.JPG").is_file());
    assert!(inbox.join("PDFs").join("b.pdf").is_file());
    assert!(inbox.join("Others").join("README").is_file());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Welcome to the File Organizer!"));
    assert!(stdout.contains("File organization completed."));

    let logged = fs::read_to_string(&log).expect("log file written");
    assert!(logged.contains("Moved: a.JPG to "), "{logged}");
    assert!(logged.contains("File organization completed."), "{logged}");
}

#[test]
fn dry_run_flag_leaves_folder_unchanged() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let (cfg, log) = write_config(&base, "normal");
    let inbox = base.join("inbox");
    fs::create_dir(&inbox).unwrap();
    fs::write(inbox.join("a.zip"), b"x").unwrap();

    let out = run(&cfg, &[OsStr::new("--dry-run"), inbox.as_os_str()]);
    assert!(out.status.success());
    assert!(inbox.join("a.zip").is_file());
    assert!(!inbox.join("Archives").exists());
    let logged = fs::read_to_string(&log).unwrap();
    assert!(logged.contains("Would move: a.zip to "), "{logged}");
}

#[test]
fn invalid_path_exits_non_zero() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let (cfg, _) = write_config(&base, "normal");
    let file = base.join("not-a-dir.txt");
    fs::write(&file, b"x").unwrap();

    let out = run(&cfg, &[file.as_os_str()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not a valid directory"), "{stderr}");
    assert!(file.is_file());

    let out = run(&cfg, &[base.join("missing").as_os_str()]);
    assert!(!out.status.success());
}

#[test]
fn print_config_reports_the_named_file() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("custom.xml");
    let out = run(&cfg, &[OsStr::new("--print-config")]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(&cfg.display().to_string()), "{stdout}");
    assert!(!cfg.exists(), "--print-config must not write anything");
}

#[test]
fn unknown_log_level_is_rejected() {
    let td = tempdir().unwrap();
    let (cfg, _) = write_config(td.path(), "normal");
    let out = run(&cfg, &[OsStr::new("--log-level"), OsStr::new("loud"), td.path().as_os_str()]);
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(2), "clap usage errors exit with 2");
}

#[test]
fn json_console_lines_are_valid_json() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let (cfg, _) = write_config(&base, "normal");
    let inbox = base.join("inbox");
    fs::create_dir(&inbox).unwrap();
    fs::write(inbox.join("sheet.csv"), b"x").unwrap();

    let out = run(&cfg, &[OsStr::new("--json"), OsStr::new("--no-log-file"), inbox.as_os_str()]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .filter(|l| l.starts_with('{'))
        .map(|l| serde_json::from_str(l).expect("valid JSON log line"))
        .collect();
    assert!(
        records.iter().any(|r| r["fields"]["message"]
            .as_str()
            .is_some_and(|m| m.starts_with("Moved: sheet.csv to "))),
        "{stdout}"
    );
    assert!(inbox.join("Spreadsheets").join("sheet.csv").is_file());
}

#[test]
fn folder_is_read_from_piped_stdin_without_path() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let (cfg, _) = write_config(&base, "normal");
    let inbox = base.join("inbox");
    fs::create_dir(&inbox).unwrap();
    fs::write(inbox.join("a.png"), b"x").unwrap();

    let mut child = Command::new(assert_cmd::cargo::cargo_bin!("file_organizer"))
        .env_remove("FILE_ORGANIZER_CONFIG")
        .arg("--config")
        .arg(&cfg)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn binary");
    {
        let mut stdin = child.stdin.take().unwrap();
        writeln!(stdin, "  \"{}\"  ", inbox.display()).unwrap();
    }
    let out = child.wait_with_output().unwrap();
    eprintln!("=== STDERR ===\n{}", String::from_utf8_lossy(&out.stderr));

    assert!(out.status.success(), "binary exited with failure");
    assert!(inbox.join("Images").join("a.png").is_file());
    assert!(!inbox.join("a.png").exists());
}
