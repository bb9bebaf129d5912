//! Runs the `fieldcast` binary against snapshot files.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use fieldcast::mesh::dump_snapshot;
use fieldcast_test_utils::{linear_shear, solid_body_rotation, uniform_flow};
use tempfile::tempdir;

fn fieldcast(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fieldcast"))
        .args(args)
        .env_remove("FIELDCAST_GEOMETRY")
        .env_remove("FIELDCAST_EDGE")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn rows_go_to_stderr_by_default() {
    let dir = tempdir().unwrap();
    let snap = dir.path().join("flow.fcsn");
    dump_snapshot(&snap, &uniform_flow(5.0, 0.0)).unwrap();

    let out = fieldcast(&[path_str(&snap), "0", "0", "1", "1", "4"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8(out.stderr).unwrap();
    let lines: Vec<_> = stderr.lines().collect();
    assert_eq!(lines.len(), 16);
    assert_eq!(lines[0], "0.125 0.125 -10 5");
    assert_eq!(lines[15], "0.875 0.875 -10 5");
}

#[test]
fn warnings_stay_out_of_the_row_stream() {
    let dir = tempdir().unwrap();
    let snap = dir.path().join("flow.fcsn");
    dump_snapshot(&snap, &uniform_flow(1.0, 0.0)).unwrap();

    // half the grid lies past the unit-square mesh
    let out = fieldcast(&[path_str(&snap), "0", "0", "2", "1", "2"]);
    assert!(out.status.success());

    let stderr = String::from_utf8(out.stderr).unwrap();
    let lines: Vec<_> = stderr.lines().collect();
    assert_eq!(lines.len(), 8);
    for line in &lines {
        assert_eq!(line.split(' ').count(), 4, "{line:?}");
        assert!(line.split(' ').all(|v| v.parse::<f64>().is_ok()), "{line:?}");
    }
    assert_eq!(lines.iter().filter(|l| l.ends_with(" 1e+30 1e+30")).count(), 4);

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("outside the snapshot domain"));
}

#[test]
fn output_option_writes_a_file() {
    let dir = tempdir().unwrap();
    let snap = dir.path().join("rot.fcsn");
    let rows = dir.path().join("rows.txt");
    dump_snapshot(&snap, &solid_body_rotation(1.0)).unwrap();

    let out = fieldcast(&[
        "--geometry",
        "planar",
        "--output",
        path_str(&rows),
        path_str(&snap),
        "0.25",
        "0.25",
        "0.75",
        "0.75",
        "2",
    ]);
    assert!(out.status.success());
    assert!(out.stderr.is_empty());

    let text = fs::read_to_string(&rows).unwrap();
    assert_eq!(text.lines().count(), 4);
    for line in text.lines() {
        assert_eq!(line.split(' ').count(), 4);
    }
}

#[test]
fn geometry_from_environment() {
    let dir = tempdir().unwrap();
    let snap = dir.path().join("rot.fcsn");
    dump_snapshot(&snap, &solid_body_rotation(1.0)).unwrap();
    let args = [path_str(&snap), "0.25", "0.25", "0.75", "0.75", "2"];

    let axi = fieldcast(&args);
    let planar = Command::new(env!("CARGO_BIN_EXE_fieldcast"))
        .args(args)
        .env("FIELDCAST_GEOMETRY", "planar")
        .env_remove("FIELDCAST_EDGE")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(axi.status.success() && planar.status.success());
    assert_ne!(axi.stderr, planar.stderr);
}

#[test]
fn invalid_resolution_exits_one_without_rows() {
    let out = fieldcast(&["missing.fcsn", "0", "0", "1", "1", "0"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("ny must be positive"));
    assert!(stderr.contains("Usage: fieldcast"));
}

#[test]
fn empty_grid_exits_one() {
    let out = fieldcast(&["missing.fcsn", "0", "0", "0.1", "1", "2"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8(out.stderr).unwrap().contains("nx <= 0"));
}

#[test]
fn missing_snapshot_leaves_no_output_file() {
    let dir = tempdir().unwrap();
    let rows = dir.path().join("rows.txt");
    let snap = dir.path().join("absent.fcsn");
    let out = fieldcast(&[
        "-o",
        path_str(&rows),
        path_str(&snap),
        "0",
        "0",
        "1",
        "1",
        "4",
    ]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!rows.exists());
}

#[test]
fn failed_run_keeps_an_existing_output_file() {
    let dir = tempdir().unwrap();
    let rows = dir.path().join("results.txt");
    fs::write(&rows, "earlier results\n").unwrap();
    let absent = dir.path().join("absent.fcsn");

    let out = fieldcast(&["-o", path_str(&rows), path_str(&absent), "0", "0", "1", "1", "4"]);
    assert_eq!(out.status.code(), Some(1));
    let out = fieldcast(&["-o", path_str(&rows), path_str(&absent), "0", "0", "0.1", "1", "2"]);
    assert_eq!(out.status.code(), Some(1));

    assert_eq!(fs::read_to_string(&rows).unwrap(), "earlier results\n");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn successful_run_replaces_an_existing_output_file() {
    let dir = tempdir().unwrap();
    let rows = dir.path().join("results.txt");
    fs::write(&rows, "earlier results\n").unwrap();
    let snap = dir.path().join("flow.fcsn");
    dump_snapshot(&snap, &uniform_flow(5.0, 0.0)).unwrap();

    let out = fieldcast(&["-o", path_str(&rows), path_str(&snap), "0", "0", "1", "1", "4"]);
    assert!(out.status.success());

    let text = fs::read_to_string(&rows).unwrap();
    assert_eq!(text.lines().count(), 16);
    assert_eq!(text.lines().next(), Some("0.125 0.125 -10 5"));
    // snapshot plus results, no staging leftovers
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn edge_option_changes_boundary_strain() {
    let dir = tempdir().unwrap();
    let snap = dir.path().join("shear.fcsn");
    dump_snapshot(&snap, &linear_shear(2.0)).unwrap();
    // a single point on the centre of the corner cell
    let args = [path_str(&snap), "0", "0", "0.0625", "0.0625", "1"];

    let clamp = fieldcast(&[&["--geometry", "planar"][..], &args[..]].concat());
    let wrap = fieldcast(&[&["--geometry", "planar", "--edge", "wrap"][..], &args[..]].concat());
    assert!(clamp.status.success() && wrap.status.success());

    let (clamp, wrap) = (
        String::from_utf8(clamp.stderr).unwrap(),
        String::from_utf8(wrap.stderr).unwrap(),
    );
    assert_eq!(clamp.lines().count(), 1);
    assert_eq!(wrap.lines().count(), 1);
    let strain = |s: &str| s.split(' ').nth(2).unwrap().parse::<f64>().unwrap();
    assert_ne!(strain(&clamp), strain(&wrap));
}

#[test]
fn help_and_version_exit_zero() {
    assert_eq!(fieldcast(&["--help"]).status.code(), Some(0));
    let version = fieldcast(&["--version"]);
    assert_eq!(version.status.code(), Some(0));
    assert!(String::from_utf8(version.stdout).unwrap().contains("fieldcast"));
}
