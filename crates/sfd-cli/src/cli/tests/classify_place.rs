//! Tests for classify and place.

use super::parse;
use crate::cli::CliCommand;
use sfd_core::FolderNaming;
use std::path::PathBuf;

#[test]
fn cli_parse_classify_defaults() {
    match parse(&["sfd", "classify", "movie.mp4.part"]) {
        CliCommand::Classify {
            filename,
            mime,
            naming,
            json,
        } => {
            assert_eq!(filename, "movie.mp4.part");
            assert_eq!(mime, "");
            assert!(naming.is_none());
            assert!(!json);
        }
        _ => panic!("expected Classify"),
    }
}

#[test]
fn cli_parse_classify_with_options() {
    match parse(&[
        "sfd", "classify", "page", "--mime", "text/html", "--naming", "cloud", "--json",
    ]) {
        CliCommand::Classify {
            filename,
            mime,
            naming,
            json,
        } => {
            assert_eq!(filename, "page");
            assert_eq!(mime, "text/html");
            assert_eq!(naming, Some(FolderNaming::Cloud));
            assert!(json);
        }
        _ => panic!("expected Classify"),
    }
}

#[test]
fn cli_parse_place() {
    match parse(&["sfd", "place", "/tmp/setup.exe"]) {
        CliCommand::Place {
            path,
            mime,
            base,
            dry_run,
        } => {
            assert_eq!(path, PathBuf::from("/tmp/setup.exe"));
            assert_eq!(mime, "");
            assert!(base.is_none());
            assert!(!dry_run);
        }
        _ => panic!("expected Place"),
    }
}

#[test]
fn cli_parse_place_with_base_and_dry_run() {
    match parse(&[
        "sfd",
        "place",
        "x.zip",
        "--mime",
        "application/zip",
        "--base",
        "/home/me/Downloads",
        "--dry-run",
    ]) {
        CliCommand::Place {
            mime, base, dry_run, ..
        } => {
            assert_eq!(mime, "application/zip");
            assert_eq!(base, Some(PathBuf::from("/home/me/Downloads")));
            assert!(dry_run);
        }
        _ => panic!("expected Place"),
    }
}
