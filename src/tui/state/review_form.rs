//! Review form state: draft fields, keyboard focus, and the error list.

use crate::catalog::{Rating, Recommendation, ReviewDraft, ValidationError};

/// The focusable fields of the review form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Reviewer name text field.
    #[default]
    Name,
    /// Review body text field.
    Review,
    /// Rating field, set with the digit keys `1` to `5`.
    Rating,
    /// Recommendation field, set with `y` or `n`.
    Recommend,
}

impl FormField {
    /// Returns the field's display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Review => "Review",
            Self::Rating => "Rating",
            Self::Recommend => "Recommend",
        }
    }

    /// Returns the next field in display order, wrapping at the end.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Review,
            Self::Review => Self::Rating,
            Self::Rating => Self::Recommend,
            Self::Recommend => Self::Name,
        }
    }

    /// Returns the previous field in display order, wrapping at the start.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Recommend,
            Self::Review => Self::Name,
            Self::Rating => Self::Review,
            Self::Recommend => Self::Rating,
        }
    }
}

/// The review form panel's state.
///
/// Owns the draft, the focused field, and the error list from the most
/// recent rejected submission. The state persists while other tabs are
/// active; nothing here is torn down on a tab switch.
#[derive(Debug, Default)]
pub struct ReviewFormState {
    draft: ReviewDraft,
    focus: FormField,
    errors: Vec<ValidationError>,
}

impl ReviewFormState {
    /// Creates an empty form with the name field focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the draft.
    #[must_use]
    pub const fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    /// Returns the draft mutably, for submission.
    pub const fn draft_mut(&mut self) -> &mut ReviewDraft {
        &mut self.draft
    }

    /// Returns the focused field.
    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    /// Returns the error list from the last rejected submission.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Moves focus to the next field.
    pub const fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field.
    pub const fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Replaces the error list after a rejected submission.
    pub fn set_errors(&mut self, errors: Vec<ValidationError>) {
        self.errors = errors;
    }

    /// Clears the error list after an accepted submission.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Routes one typed character to the focused field.
    ///
    /// Text fields take any character. The rating field takes the digits
    /// `1` to `5`; the recommendation field takes `y` or `n`. Characters a
    /// field cannot use are dropped.
    pub fn input_char(&mut self, character: char) {
        match self.focus {
            FormField::Name => self.draft.push_name_char(character),
            FormField::Review => self.draft.push_review_char(character),
            FormField::Rating => Self::apply_rating_key(&mut self.draft, character),
            FormField::Recommend => Self::apply_recommend_key(&mut self.draft, character),
        }
    }

    /// Applies backspace to the focused field.
    ///
    /// Text fields drop their last character; the rating and recommendation
    /// fields clear their choice.
    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Name => self.draft.pop_name_char(),
            FormField::Review => self.draft.pop_review_char(),
            FormField::Rating => self.draft.clear_rating(),
            FormField::Recommend => self.draft.clear_recommend(),
        }
    }

    /// Resets focus to the first field, keeping the draft and errors.
    pub const fn reset_focus(&mut self) {
        self.focus = FormField::Name;
    }

    fn apply_rating_key(draft: &mut ReviewDraft, character: char) {
        let Some(digit) = character.to_digit(10) else {
            return;
        };
        let Ok(value) = u8::try_from(digit) else {
            return;
        };
        if let Ok(rating) = Rating::new(value) {
            draft.set_rating(rating);
        }
    }

    fn apply_recommend_key(draft: &mut ReviewDraft, character: char) {
        match character.to_ascii_lowercase() {
            'y' => draft.set_recommend(Recommendation::Yes),
            'n' => draft.set_recommend(Recommendation::No),
            _ => {}
        }
    }
}
