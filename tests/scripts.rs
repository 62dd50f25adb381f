use std::{fs, path::Path};

use russet::{error::ErrorKind, run_file};
use walkdir::WalkDir;

#[test]
fn sample_scripts_produce_their_expected_output() {
    let mut count = 0;

    for entry in WalkDir::new("scripts").max_depth(1)
                                        .sort_by_file_name()
                                        .into_iter()
                                        .filter_map(Result::ok)
                                        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rss"))
    {
        let path = entry.path();
        let expected = expected_output(path);
        count += 1;

        let mut output = Vec::new();
        if let Err(e) = run_file(path, &mut output) {
            panic!("Script {path:?} failed:\n{e}");
        }

        let actual = String::from_utf8(output).unwrap_or_else(|e| panic!("{path:?}: {e}"));
        assert_eq!(actual, expected, "output of {path:?}");
    }

    assert!(count > 0, "No scripts found in scripts/");
}

#[test]
fn missing_program_file_is_an_io_error() {
    let e = run_file(Path::new("scripts/does_not_exist.rss"), &mut Vec::new())
        .expect_err("missing file");

    assert_eq!(e.kind(), None);
    assert!(e.message().starts_with("Could not read scripts/does_not_exist.rss"));
}

#[test]
fn importing_a_directory_is_unreadable() {
    let e = run_file(Path::new("scripts/errors/import_directory.rss"), &mut Vec::new())
        .expect_err("a directory cannot be imported");

    assert_eq!(e.kind(), Some(ErrorKind::Semantic));
    assert!(e.message().starts_with("Could not read imported file "), "{}", e.message());
    assert_eq!(e.position().map(|p| p.line), Some(2));
}

fn expected_output(script: &Path) -> String {
    let path = script.with_extension("out");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}
