//! Review submission form panel.

use crate::catalog::ValidationError;
use crate::tui::state::{FormField, ReviewFormState};

/// Context for rendering the review form panel.
#[derive(Debug)]
pub struct ReviewFormViewContext<'a> {
    /// The form state: draft, focus, and error list.
    pub form: &'a ReviewFormState,
}

/// Component rendering the review form panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewFormComponent;

impl ReviewFormComponent {
    /// Renders the error list (if any) above the four form fields.
    #[must_use]
    pub fn view(ctx: &ReviewFormViewContext<'_>) -> String {
        let mut output = String::new();

        output.push_str(&Self::format_errors(ctx.form.errors()));

        let draft = ctx.form.draft();
        let rating = draft
            .rating()
            .map_or_else(String::new, |rating| rating.to_string());
        let recommend = draft
            .recommend()
            .map_or("", |recommendation| recommendation.label());

        output.push_str(&Self::format_field(ctx, FormField::Name, draft.name()));
        output.push_str(&Self::format_field(ctx, FormField::Review, draft.review()));
        output.push_str(&Self::format_field(ctx, FormField::Rating, &rating));
        output.push_str(&Self::format_field(ctx, FormField::Recommend, recommend));

        output
    }

    fn format_errors(errors: &[ValidationError]) -> String {
        if errors.is_empty() {
            return String::new();
        }

        let mut output = String::from("  Please correct the following error(s):\n");
        for error in errors {
            output.push_str(&format!("  - {error}\n"));
        }
        output.push('\n');
        output
    }

    fn format_field(ctx: &ReviewFormViewContext<'_>, field: FormField, value: &str) -> String {
        let marker = if ctx.form.focus() == field { ">" } else { " " };
        format!("{marker} {}: {value}\n", field.label())
    }
}

#[cfg(test)]
mod tests {
    use super::{ReviewFormComponent, ReviewFormViewContext};
    use crate::catalog::ValidationError;
    use crate::tui::state::ReviewFormState;

    #[test]
    fn renders_all_four_fields_with_focus_marker_on_the_first() {
        let form = ReviewFormState::new();
        let output = ReviewFormComponent::view(&ReviewFormViewContext { form: &form });

        assert!(output.contains("> Name:"));
        assert!(output.contains("  Review:"));
        assert!(output.contains("  Rating:"));
        assert!(output.contains("  Recommend:"));
    }

    #[test]
    fn rejection_errors_render_above_the_fields() {
        let mut form = ReviewFormState::new();
        form.set_errors(vec![
            ValidationError::NameRequired,
            ValidationError::RatingRequired,
        ]);
        let output = ReviewFormComponent::view(&ReviewFormViewContext { form: &form });

        assert!(output.contains("- Name is required"));
        assert!(output.contains("- Rating is required"));
        let errors_at = output.find("Name is required");
        let fields_at = output.find("> Name:");
        assert!(errors_at < fields_at, "errors render before the fields");
    }

    #[test]
    fn typed_values_appear_in_their_fields() {
        let mut form = ReviewFormState::new();
        form.input_char('A');
        form.focus_previous();
        form.input_char('y');
        let output = ReviewFormComponent::view(&ReviewFormViewContext { form: &form });

        assert!(output.contains("Name: A"));
        assert!(output.contains("> Recommend: yes"));
    }
}
