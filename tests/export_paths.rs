// tests/export_paths.rs
//
// Tests for output path resolution and the export writer.

use std::path::{Path, PathBuf};

use preisschild::csv::Delim;
use preisschild::data::ComparisonTable;
use preisschild::file::{default_export_name, resolve_out_path, write_export};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("preisschild_test_{name}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn default_export_name_tracks_the_format() {
    assert_eq!(default_export_name(Delim::Csv), "preisvergleich.csv");
    assert_eq!(default_export_name(Delim::Tsv), "preisvergleich.tsv");
}

#[test]
fn no_user_path_falls_back_to_default_filename() {
    let p = resolve_out_path(None, "preisvergleich.csv").expect("resolve");
    assert_eq!(p, Path::new("preisvergleich.csv"));
}

#[test]
fn explicit_file_path_is_kept() {
    let p = resolve_out_path(Some(Path::new("reports/august.csv")), "preisvergleich.csv")
        .expect("resolve");
    assert_eq!(p, Path::new("reports/august.csv"));
}

#[test]
fn existing_directory_gets_default_filename_appended() {
    let dir = temp_dir("dir_append");
    let p = resolve_out_path(Some(&dir), "preisvergleich.csv").expect("resolve");
    assert_eq!(p, dir.join("preisvergleich.csv"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn write_export_creates_parent_dirs_and_file() {
    let dir = temp_dir("write");
    let target = dir.join("sub").join("vergleich.csv");

    let rows = vec![vec![
        String::from("Feuerdepot"),
        String::from("https://example.invalid/x"),
        String::new(),
        String::new(),
        String::from("949,00 €"),
        String::new(),
        String::new(),
        String::new(),
    ]];

    let written = write_export(
        &target,
        &Some(ComparisonTable::headers()),
        &rows,
        true,
        Delim::Csv,
    )
    .expect("write");

    let text = std::fs::read_to_string(&written).expect("read back");
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Shop,URL,Name,UVP,Preis,Lieferzeit,Artikelnummer,EAN"
    );
    assert!(lines.next().unwrap().starts_with("Feuerdepot,"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn headers_can_be_suppressed() {
    let dir = temp_dir("no_headers");
    let target = dir.join("vergleich.csv");

    let rows = vec![vec![String::from("Kamdi24"); 8]];
    write_export(&target, &Some(ComparisonTable::headers()), &rows, false, Delim::Csv)
        .expect("write");

    let text = std::fs::read_to_string(&target).expect("read back");
    assert!(text.starts_with("Kamdi24,"));
    let _ = std::fs::remove_dir_all(&dir);
}
