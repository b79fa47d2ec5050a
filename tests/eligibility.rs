// tests/eligibility.rs

use proptest::prelude::*;

use hookrun::hooks::{is_eligible, ELIGIBLE_EXTENSIONS};

#[test]
fn listed_extensions_are_eligible_at_any_depth() {
    assert!(is_eligible("main.go"));
    assert!(is_eligible("src/lib.rs"));
    assert!(is_eligible("src/deep/nested/dir/handler.py"));
    assert!(is_eligible("./relative/path/to/index.ts"));
}

#[test]
fn every_listed_extension_is_eligible() {
    for ext in ELIGIBLE_EXTENSIONS {
        let path = format!("some/dir/file.{ext}");
        assert!(is_eligible(&path), "extension '{ext}' should be eligible");
    }
}

#[test]
fn unlisted_extensions_are_not_eligible() {
    assert!(!is_eligible("scratch.tmp"));
    assert!(!is_eligible("build/output.o"));
    assert!(!is_eligible("editor.swp"));
    assert!(!is_eligible("archive.tar.gz"));
}

#[test]
fn paths_without_an_extension_are_not_eligible() {
    assert!(!is_eligible("Makefile"));
    assert!(!is_eligible("src/bin/tool"));
    assert!(!is_eligible(".env"));
    assert!(!is_eligible(""));
}

proptest! {
    #[test]
    fn eligible_extension_wins_regardless_of_path_shape(
        segments in proptest::collection::vec("[a-z][a-z0-9_]{0,7}", 0..6),
        stem in "[a-z][a-z0-9_]{0,7}",
        idx in 0..ELIGIBLE_EXTENSIONS.len(),
    ) {
        let ext = ELIGIBLE_EXTENSIONS[idx];
        let mut path = segments.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&stem);
        path.push('.');
        path.push_str(ext);

        prop_assert!(is_eligible(&path));
    }

    #[test]
    fn unknown_extension_never_becomes_eligible(
        segments in proptest::collection::vec("[a-z][a-z0-9_]{0,7}", 0..6),
        stem in "[a-z][a-z0-9_]{0,7}",
        ext in "[a-z]{1,6}",
    ) {
        prop_assume!(!ELIGIBLE_EXTENSIONS.contains(&ext.as_str()));

        let mut path = segments.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&stem);
        path.push('.');
        path.push_str(&ext);

        prop_assert!(!is_eligible(&path));
    }
}
