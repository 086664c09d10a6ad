// src/grading.rs

use crate::models::test::Question;

/// Normalizes an answer for comparison: surrounding whitespace stripped,
/// lowercased. Applied to the answer key at creation time and to every
/// submitted answer at grading time.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Computes the total score for a submission.
///
/// Correspondence between questions and answers is purely positional.
/// A submitted answer matches when its normalized form equals the stored
/// (already-normalized) key exactly; a missing answer is treated as the
/// empty string and never matches a non-empty key. No partial credit.
pub fn grade(questions: &[Question], answers: &[String]) -> i64 {
    let mut total = 0;
    for (idx, question) in questions.iter().enumerate() {
        let submitted = answers.get(idx).map(String::as_str).unwrap_or("");
        if normalize_answer(submitted) == question.answer {
            total += question.score;
        }
    }
    total
}
