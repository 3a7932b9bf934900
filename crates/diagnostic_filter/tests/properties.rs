use diagnostic_filter::{DiagnosticsMap, filter_by_ignore_patterns};
use proptest::prelude::*;

const SEGMENTS: &[&str] = &[
    "vendor", "src", "tests", "fixtures", "cache", "main.php", "a.generated.php", "lib.php",
];

const PATTERNS: &[&str] = &[
    "vendor/**",
    "tests/fixtures/**",
    "*.generated.php",
    "**/*.generated.php",
    "src/*.php",
    "**/cache/**",
    "[!s]*/lib.php",
    "",
];

fn arb_relative_path() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(SEGMENTS), 1..5)
}

fn arb_diagnostics() -> impl Strategy<Value = DiagnosticsMap<u32>> {
    prop::collection::vec((arb_relative_path(), prop::collection::vec(any::<u32>(), 0..3)), 0..12)
        .prop_map(|entries| {
            entries
                .into_iter()
                .map(|(segments, values)| (format!("file:///project/{}", segments.join("/")), values))
                .collect::<DiagnosticsMap<u32>>()
        })
}

fn arb_patterns() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(PATTERNS), 0..4)
}

proptest! {
    #[test]
    fn empty_patterns_are_identity(diagnostics in arb_diagnostics()) {
        let no_patterns: &[&str] = &[];
        let result = filter_by_ignore_patterns(diagnostics.clone(), no_patterns, "/project");
        prop_assert_eq!(result, diagnostics);
    }

    #[test]
    fn result_is_a_subset_with_unchanged_values(
        diagnostics in arb_diagnostics(),
        patterns in arb_patterns(),
    ) {
        let result = filter_by_ignore_patterns(diagnostics.clone(), &patterns, "/project");

        prop_assert!(result.len() <= diagnostics.len());
        for (uri, values) in &result {
            prop_assert_eq!(diagnostics.get(uri), Some(values));
        }

        // survivors keep their relative order
        let expected_order: Vec<&String> = diagnostics
            .keys()
            .filter(|uri| result.contains_key(*uri))
            .collect();
        prop_assert_eq!(result.keys().collect::<Vec<_>>(), expected_order);
    }

    #[test]
    fn filtering_is_idempotent(diagnostics in arb_diagnostics(), patterns in arb_patterns()) {
        let once = filter_by_ignore_patterns(diagnostics, &patterns, "/project");
        let twice = filter_by_ignore_patterns(once.clone(), &patterns, "/project");
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn vendor_pattern_excludes_everything_below_vendor(diagnostics in arb_diagnostics()) {
        let result = filter_by_ignore_patterns(diagnostics.clone(), &["vendor/**"], "/project");

        for uri in diagnostics.keys() {
            let under_vendor = uri.starts_with("file:///project/vendor/");
            prop_assert_eq!(result.contains_key(uri), !under_vendor, "uri: {}", uri);
        }
    }

    #[test]
    fn backslash_root_behaves_like_forward_slash_root(
        segments in prop::collection::vec(arb_relative_path(), 0..8),
        patterns in arb_patterns(),
    ) {
        let diagnostics: DiagnosticsMap<u32> = segments
            .iter()
            .map(|s| (format!("file:///C:/project/{}", s.join("/")), vec![1]))
            .collect();

        let backslash = filter_by_ignore_patterns(diagnostics.clone(), &patterns, "C:\\project");
        let forward = filter_by_ignore_patterns(diagnostics, &patterns, "C:/project");
        prop_assert_eq!(backslash, forward);
    }
}

#[test]
fn test_vendor_scenario() {
    let mut diagnostics = DiagnosticsMap::new();
    diagnostics.insert("file:///project/vendor/a/b.php".to_string(), vec!["A"]);
    diagnostics.insert("file:///project/src/b.php".to_string(), vec!["B"]);

    let result = filter_by_ignore_patterns(diagnostics, &["vendor/**"], "/project");

    assert_eq!(result.len(), 1);
    assert_eq!(result["file:///project/src/b.php"], vec!["B"]);
}

#[test]
fn test_root_only_versus_any_depth() {
    let mut diagnostics = DiagnosticsMap::new();
    diagnostics.insert("file:///project/a.generated.php".to_string(), vec![1]);
    diagnostics.insert("file:///project/src/a.generated.php".to_string(), vec![2]);

    let root_only = filter_by_ignore_patterns(diagnostics.clone(), &["*.generated.php"], "/project");
    assert_eq!(
        root_only.keys().collect::<Vec<_>>(),
        ["file:///project/src/a.generated.php"]
    );

    let any_depth = filter_by_ignore_patterns(diagnostics, &["**/*.generated.php"], "/project");
    assert!(any_depth.is_empty());
}
