use texel_format::{
    fixtures::TEST_CASES,
    harness::{run_all, Outcome},
    lookup, s3tc, Layout,
};

#[test]
fn all_test_cases() {
    texel_format::initialize();

    let mut failures = Vec::new();
    let summary = run_all(TEST_CASES, |case, outcome| {
        if let Outcome::Failed(errors) = outcome {
            failures.push(format!("{}: {errors:#?}", lookup(case.format).name));
        }
    });

    assert!(failures.is_empty(), "{}", failures.join("\n"));
    assert_eq!(TEST_CASES.len(), summary.total());
    assert!(summary.passed > 0);
}

#[test]
fn compressed_cases_skip_only_without_library() {
    texel_format::initialize();

    let compressed = TEST_CASES
        .iter()
        .filter(|c| lookup(c.format).layout == Layout::BlockCompressed)
        .count();
    let summary = run_all(TEST_CASES, |_, _| ());
    if s3tc::is_available() {
        assert_eq!(0, summary.skipped);
    } else {
        assert_eq!(compressed, summary.skipped);
    }
}
