use prep_score::ScoreInput;

use crate::error::ApiError;

/// Upper bound on answers accepted in a single compute request
pub const MAX_ANSWERS_PER_REQUEST: usize = 200_000;

/// Body size limit for compute requests.
///
/// Leaves room for [`MAX_ANSWERS_PER_REQUEST`] answers of about 120 bytes each,
/// so oversized histories reach validation and get a 422 instead of a 413.
pub const MAX_COMPUTE_BODY_BYTES: usize = 24 * 1024 * 1024;

/// Validate a client-supplied score input before it reaches the engine
///
/// # Examples
/// ```
/// use prep_api::validation::validate_score_input;
/// use prep_score::{AnswerEvent, ScoreInput};
///
/// let input = ScoreInput::new(vec![AnswerEvent::new("q1", true, 0)], 100);
/// assert!(validate_score_input(&input).is_ok());
///
/// let input = ScoreInput::new(vec![AnswerEvent::new("", true, 0)], 100);
/// assert!(validate_score_input(&input).is_err());
/// ```
pub fn validate_score_input(input: &ScoreInput) -> Result<(), ApiError> {
    if input.answers.len() > MAX_ANSWERS_PER_REQUEST {
        return Err(ApiError::Validation(format!(
            "Too many answers: {} (maximum is {})",
            input.answers.len(),
            MAX_ANSWERS_PER_REQUEST
        )));
    }

    if let Some(index) = input
        .answers
        .iter()
        .position(|a| a.question_id.trim().is_empty())
    {
        return Err(ApiError::Validation(format!(
            "Answer {index} has an empty questionId"
        )));
    }

    Ok(())
}
