//! Integration test: observable suite behavior.
//!
//! Validates that:
//! 1. The first failing assertion decides the case and skips the rest of it.
//! 2. Failures stay isolated to their own case.
//! 3. Summary and details follow registration order and pluralize correctly.
//! 4. `add_suite` appends in source order without touching the source suite.

use std::sync::atomic::{AtomicUsize, Ordering};

use e42_unit::{CaseState, DynamicBuffer, TestCase, TestResult, TestSuite, suite_add_test};

static AFTER_FAILURE: AtomicUsize = AtomicUsize::new(0);

fn adds_up(tc: &mut TestCase) -> TestResult {
    tc.assert_int_equals(4, 2 + 2)?;
    tc.assert_str_equals("word", "word")?;
    Ok(())
}

fn breaks_midway(tc: &mut TestCase) -> TestResult {
    tc.assert_true(true)?;
    tc.assert_str_equals_msg("name", "alice", "bob")?;
    AFTER_FAILURE.fetch_add(1, Ordering::SeqCst);
    tc.assert_true(false)?;
    Ok(())
}

fn boom(tc: &mut TestCase) -> TestResult {
    tc.fail("boom")
}

fn render(suite: &TestSuite) -> (String, String) {
    let mut summary = DynamicBuffer::new();
    let mut details = DynamicBuffer::new();
    suite.summary(&mut summary);
    suite.details(&mut details);
    (summary.into_string(), details.into_string())
}

#[test]
fn failing_assertion_skips_remaining_code_and_spares_siblings() {
    let mut suite = TestSuite::new();
    suite_add_test!(suite, adds_up).unwrap();
    suite_add_test!(suite, breaks_midway).unwrap();
    suite_add_test!(suite, adds_up).unwrap();
    suite.run();

    assert_eq!(AFTER_FAILURE.load(Ordering::SeqCst), 0);
    let states: Vec<CaseState> = suite.cases().iter().map(TestCase::state).collect();
    assert_eq!(
        states,
        [CaseState::Passed, CaseState::Failed, CaseState::Passed]
    );
    assert!(suite.cases().iter().all(TestCase::ran));

    let message = suite.cases()[1].message().unwrap();
    assert!(
        message.starts_with("name: expected <alice> but was <bob> (at "),
        "{message}"
    );
    assert!(message.contains("suite_properties_test.rs:"), "{message}");
}

#[test]
fn reference_scenario_pass_fail_pass() {
    let mut suite = TestSuite::new();
    suite.add(TestCase::new("A", adds_up)).unwrap();
    suite.add(TestCase::new("B", boom)).unwrap();
    suite.add(TestCase::new("C", adds_up)).unwrap();
    suite.run();

    assert_eq!(suite.fail_count(), 1);
    let (summary, details) = render(&suite);
    assert_eq!(summary, ".F.\n\n");
    assert!(details.contains("1) B: boom"), "{details}");
    assert!(details.contains("Runs: 3 Passes: 2 Fails: 1"), "{details}");
}

#[test]
fn summary_length_tracks_case_count() {
    let mut suite = TestSuite::new();
    for i in 0..25 {
        if i % 4 == 0 {
            suite.add(TestCase::new(format!("case_{i}"), boom)).unwrap();
        } else {
            suite.add(TestCase::new(format!("case_{i}"), adds_up)).unwrap();
        }
    }
    suite.run();

    let (summary, _) = render(&suite);
    let marks = summary.trim_end_matches('\n');
    assert_eq!(marks.len(), suite.len());
    for (mark, case) in marks.chars().zip(suite.cases()) {
        assert_eq!(mark == 'F', case.failed(), "{}", case.name());
    }
    assert_eq!(suite.fail_count(), 7);
}

#[test]
fn add_suite_keeps_first_then_appended_order() {
    let mut first = TestSuite::new();
    first.add(TestCase::new("first_a", adds_up)).unwrap();
    first.add(TestCase::new("first_b", boom)).unwrap();

    let mut second = TestSuite::new();
    second.add(TestCase::new("second_a", boom)).unwrap();
    second.add(TestCase::new("second_b", adds_up)).unwrap();

    first.add_suite(&second).unwrap();
    assert_eq!(second.len(), 2);
    assert!(second.cases().iter().all(|c| c.state() == CaseState::NotRun));

    first.run();
    let names: Vec<&str> = first.cases().iter().map(TestCase::name).collect();
    assert_eq!(names, ["first_a", "first_b", "second_a", "second_b"]);

    let (summary, details) = render(&first);
    assert_eq!(summary, ".FF.\n\n");
    assert!(details.starts_with("There were 2 failures:\n1) first_b: boom"));
    assert!(details.contains("\n2) second_a: boom"));
}

#[test]
fn closures_can_capture_fixtures() {
    let expected = String::from("shared");
    let mut suite = TestSuite::new();
    suite
        .add(TestCase::new("captures", move |tc: &mut TestCase| {
            tc.assert_str_equals(expected.as_str(), "shared")
        }))
        .unwrap();
    suite.run();
    let (_, details) = render(&suite);
    assert_eq!(details, "OK (1 test)\n");
}
