//! Fill-in-the-blank values for exercise templates.
//!
//! An exercise ships with a blank where the learner's answer goes; a test that
//! still compares against a blank fails with an obviously wrong value.

/// Integer blank.
pub const BLANK_INT: i64 = -99;

/// String blank.
pub const BLANK_STR: &str = "";

/// Array blank: ten zeros.
pub const BLANK_ARRAY: [i64; 10] = [0; 10];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestCase;

    #[test]
    fn unfilled_blank_fails_the_comparison() {
        let mut tc = TestCase::new("blank", |tc: &mut TestCase| {
            tc.assert_int_equals(4, BLANK_INT)?;
            Ok(())
        });
        tc.run();
        assert!(tc.failed());
        assert!(tc.message().is_some_and(|m| m.starts_with("expected <4> but was <-99>")));
        assert!(BLANK_STR.is_empty());
        assert!(BLANK_ARRAY.iter().all(|&v| v == 0));
    }
}
