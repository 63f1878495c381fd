//! Review draft state machine and submission validation.
//!
//! A draft is always in the editing state. Submitting either accepts the
//! draft (producing an immutable [`ReviewRecord`] and clearing every field)
//! or rejects it (leaving every field untouched and reporting the complete
//! error list for this attempt).

use thiserror::Error;

use super::error::ValidationError;
use super::model::{Rating, Recommendation, ReviewRecord};

/// An in-progress, unsubmitted review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    name: String,
    review: String,
    rating: Option<Rating>,
    recommend: Option<Recommendation>,
}

impl ReviewDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reviewer name entered so far.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the review text entered so far.
    #[must_use]
    pub fn review(&self) -> &str {
        &self.review
    }

    /// Returns the chosen rating, if any.
    #[must_use]
    pub const fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Returns the chosen recommendation, if any.
    #[must_use]
    pub const fn recommend(&self) -> Option<Recommendation> {
        self.recommend
    }

    /// Appends one character to the name field.
    pub fn push_name_char(&mut self, character: char) {
        self.name.push(character);
    }

    /// Removes the last character of the name field, if present.
    pub fn pop_name_char(&mut self) {
        let _ = self.name.pop();
    }

    /// Appends one character to the review text field.
    pub fn push_review_char(&mut self, character: char) {
        self.review.push(character);
    }

    /// Removes the last character of the review text field, if present.
    pub fn pop_review_char(&mut self) {
        let _ = self.review.pop();
    }

    /// Sets the rating.
    pub const fn set_rating(&mut self, rating: Rating) {
        self.rating = Some(rating);
    }

    /// Clears the rating.
    pub const fn clear_rating(&mut self) {
        self.rating = None;
    }

    /// Sets the recommendation.
    pub const fn set_recommend(&mut self, recommend: Recommendation) {
        self.recommend = Some(recommend);
    }

    /// Clears the recommendation.
    pub const fn clear_recommend(&mut self) {
        self.recommend = None;
    }

    /// Returns whether every field is still untouched or cleared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.review.is_empty()
            && self.rating.is_none()
            && self.recommend.is_none()
    }

    /// Validates the draft without consuming it.
    ///
    /// The result is recomputed in full on every call, in fixed field order:
    /// name, review text, rating, recommendation. Every missing field
    /// contributes an error, not just the first.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push(ValidationError::NameRequired);
        }
        if self.review.is_empty() {
            errors.push(ValidationError::ReviewRequired);
        }
        if self.rating.is_none() {
            errors.push(ValidationError::RatingRequired);
        }
        if self.recommend.is_none() {
            errors.push(ValidationError::RecommendationRequired);
        }
        errors
    }

    /// Attempts to submit the draft.
    ///
    /// On acceptance every field is cleared and the accepted record is
    /// returned. On rejection the draft is left exactly as entered, so the
    /// user can correct it and retry.
    ///
    /// A draft is accepted only when all four fields are present: name,
    /// review text, rating, and recommendation.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewRejection`] carrying the full, ordered validation
    /// error list for this attempt.
    pub fn submit(&mut self) -> Result<ReviewRecord, ReviewRejection> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(ReviewRejection { errors });
        }

        let (Some(rating), Some(recommend)) = (self.rating, self.recommend) else {
            // validate() guarantees both are present on the accepted path.
            return Err(ReviewRejection {
                errors: vec![
                    ValidationError::RatingRequired,
                    ValidationError::RecommendationRequired,
                ],
            });
        };

        let record = ReviewRecord {
            name: std::mem::take(&mut self.name),
            review: std::mem::take(&mut self.review),
            rating,
            recommend,
        };
        self.rating = None;
        self.recommend = None;
        Ok(record)
    }
}

/// A rejected submission: the complete validation error list for one attempt.
///
/// Each attempt replaces the previous list; errors never accumulate across
/// submits.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("review submission rejected with {} error(s)", errors.len())]
pub struct ReviewRejection {
    errors: Vec<ValidationError>,
}

impl ReviewRejection {
    /// Returns the errors in validation order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the human-readable messages in validation order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Consumes the rejection, yielding the error list.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ReviewDraft, ValidationError};
    use crate::catalog::model::{Rating, Recommendation};

    fn rating(value: u8) -> Rating {
        Rating::new(value).unwrap_or_else(|error| panic!("rating {value} invalid: {error}"))
    }

    fn filled_draft() -> ReviewDraft {
        let mut draft = ReviewDraft::new();
        for character in "Ana".chars() {
            draft.push_name_char(character);
        }
        for character in "Great socks".chars() {
            draft.push_review_char(character);
        }
        draft.set_rating(rating(4));
        draft.set_recommend(Recommendation::Yes);
        draft
    }

    #[test]
    fn empty_draft_reports_all_four_errors_in_order() {
        let draft = ReviewDraft::new();
        assert_eq!(
            draft.validate(),
            vec![
                ValidationError::NameRequired,
                ValidationError::ReviewRequired,
                ValidationError::RatingRequired,
                ValidationError::RecommendationRequired,
            ]
        );
    }

    #[test]
    fn missing_name_alone_reports_exactly_one_error() {
        let mut draft = filled_draft();
        while !draft.name().is_empty() {
            draft.pop_name_char();
        }
        draft.pop_review_char();
        draft.push_review_char('s');

        assert_eq!(draft.validate(), vec![ValidationError::NameRequired]);
    }

    #[test]
    fn accepted_submission_returns_record_and_clears_fields() {
        let mut draft = filled_draft();

        let record = draft.submit();

        let Ok(record) = record else {
            panic!("expected acceptance, got {record:?}");
        };
        assert_eq!(record.name, "Ana");
        assert_eq!(record.review, "Great socks");
        assert_eq!(record.rating.value(), 4);
        assert_eq!(record.recommend, Recommendation::Yes);
        assert!(draft.is_empty(), "acceptance must reset the draft");
    }

    #[test]
    fn rejected_submission_keeps_fields_unchanged() {
        let mut draft = ReviewDraft::new();
        draft.push_review_char('x');
        draft.set_rating(rating(5));
        draft.set_recommend(Recommendation::Yes);

        let result = draft.submit();

        let Err(rejection) = result else {
            panic!("expected rejection, got {result:?}");
        };
        assert_eq!(rejection.errors(), &[ValidationError::NameRequired]);
        assert_eq!(draft.review(), "x");
        assert_eq!(draft.rating(), Some(rating(5)));
        assert_eq!(draft.recommend(), Some(Recommendation::Yes));
    }

    #[test]
    fn each_attempt_replaces_the_previous_error_list() {
        let mut draft = ReviewDraft::new();

        let first = draft.submit().err().map(|r| r.errors().len());
        assert_eq!(first, Some(4));

        draft.push_name_char('A');
        let second = draft.submit().err().map(super::ReviewRejection::into_errors);
        assert_eq!(
            second,
            Some(vec![
                ValidationError::ReviewRequired,
                ValidationError::RatingRequired,
                ValidationError::RecommendationRequired,
            ])
        );
    }

    #[test]
    fn recommendation_is_required_for_acceptance() {
        let mut draft = filled_draft();
        draft.clear_recommend();

        let result = draft.submit();
        assert_eq!(
            result.err().map(super::ReviewRejection::into_errors),
            Some(vec![ValidationError::RecommendationRequired])
        );
    }

    #[rstest]
    #[case("Name is required", ValidationError::NameRequired)]
    #[case("Review is required", ValidationError::ReviewRequired)]
    #[case("Rating is required", ValidationError::RatingRequired)]
    #[case("Recommendation is required", ValidationError::RecommendationRequired)]
    fn error_messages_match_the_contract(
        #[case] expected: &str,
        #[case] error: ValidationError,
    ) {
        assert_eq!(error.to_string(), expected);
    }
}
