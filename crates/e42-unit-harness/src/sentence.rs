//! Word counting exercise and the cases that check it.

use e42_unit::{TestCase, TestResult};

/// Number of maximal runs of non-space characters in `sentence`.
#[must_use]
pub fn number_of_words(sentence: &str) -> i64 {
    let words = sentence.split(' ').filter(|word| !word.is_empty()).count();
    i64::try_from(words).unwrap_or(i64::MAX)
}

pub fn single_word_test(tc: &mut TestCase) -> TestResult {
    tc.assert_int_equals(1, number_of_words("namasthey"))
}

pub fn multiple_word_test(tc: &mut TestCase) -> TestResult {
    tc.assert_int_equals(4, number_of_words("namasthey welcome to coding"))
}

pub fn more_than_single_space_test(tc: &mut TestCase) -> TestResult {
    tc.assert_int_equals_msg(
        "number_of_words(\"namasthey    welcome\")",
        2,
        number_of_words("namasthey    welcome"),
    )
}

pub fn extra_spaces_test(tc: &mut TestCase) -> TestResult {
    tc.assert_int_equals(2, number_of_words("   namasthey    welcome  "))
}
