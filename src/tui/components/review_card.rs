//! Review card component for rendering the current response.
//!
//! The card shows the response identifier, its rating status, the model
//! label, and the prompt / response / expected-answer text, each wrapped to
//! the card width and substituting a placeholder for absent fields.

use crate::backend::models::ReviewItem;

use super::text_truncate::{truncate_to_display_width, truncate_to_height};
use super::text_wrap::wrap_text;

const NO_MODEL_PLACEHOLDER: &str = "(unknown model)";
const NO_PROMPT_PLACEHOLDER: &str = "(no prompt)";
const NO_RESPONSE_PLACEHOLDER: &str = "(no response text)";
const NO_ANSWER_PLACEHOLDER: &str = "(no expected answer)";
const NO_SELECTION_PLACEHOLDER: &str = "(no response selected)";

/// Context for rendering the review card.
///
/// Bundles the data needed to render the card without requiring per-frame
/// allocations in the caller.
#[derive(Debug, Clone)]
pub struct ReviewCardViewContext<'a> {
    /// The response under the cursor, if any.
    pub item: Option<&'a ReviewItem>,
    /// Maximum width in columns for wrapping.
    pub max_width: usize,
    /// Maximum height in lines for the card (0 = unlimited).
    pub max_height: usize,
}

/// Component for displaying a single response awaiting judgment.
#[derive(Debug, Default)]
pub struct ReviewCardComponent;

impl ReviewCardComponent {
    /// Creates a new review card component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the review card as a string.
    ///
    /// Returns a formatted card containing a separator, the identifier and
    /// rating-status line, the model label, and the wrapped text sections.
    /// If no response is selected, returns a placeholder message. Output is
    /// truncated to `max_height` lines when that is non-zero.
    #[must_use]
    pub fn view(&self, ctx: &ReviewCardViewContext<'_>) -> String {
        let Some(item) = ctx.item else {
            return format!("{NO_SELECTION_PLACEHOLDER}\n");
        };

        let mut output = String::new();

        output.push_str(&Self::render_separator(ctx.max_width));
        output.push('\n');

        output.push_str(&Self::render_identity_line(item, ctx.max_width));
        output.push('\n');

        let model = item.model.as_deref().unwrap_or(NO_MODEL_PLACEHOLDER);
        output.push_str(&truncate_to_display_width(
            &format!("Model: {model}"),
            ctx.max_width,
        ));
        output.push('\n');

        Self::render_section(
            &mut output,
            "Prompt",
            item.prompt.as_deref().unwrap_or(NO_PROMPT_PLACEHOLDER),
            ctx.max_width,
        );
        Self::render_section(
            &mut output,
            "Response",
            item.response.as_deref().unwrap_or(NO_RESPONSE_PLACEHOLDER),
            ctx.max_width,
        );
        Self::render_section(
            &mut output,
            "Expected answer",
            item.correct_answer
                .as_deref()
                .unwrap_or(NO_ANSWER_PLACEHOLDER),
            ctx.max_width,
        );

        if ctx.max_height > 0 {
            truncate_to_height(&mut output, ctx.max_height);
        }

        output
    }

    /// Renders a horizontal separator line.
    fn render_separator(width: usize) -> String {
        "\u{2500}".repeat(width)
    }

    /// Renders the identifier badge and rating-status pill.
    fn render_identity_line(item: &ReviewItem, max_width: usize) -> String {
        let line = format!("ID: {}  [{}]", item.id, item.rating_status().label());
        truncate_to_display_width(&line, max_width)
    }

    /// Renders one labelled, wrapped text section.
    fn render_section(output: &mut String, label: &str, text: &str, max_width: usize) {
        output.push('\n');
        output.push_str(label);
        output.push_str(":\n");
        output.push_str(&wrap_text(text, max_width));
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::models::{ResponseId, ReviewItem};

    use super::*;

    fn full_item() -> ReviewItem {
        ReviewItem {
            id: ResponseId::Number(7),
            model: Some("Groq LLaMA3".to_owned()),
            prompt: Some("What is 2+2?".to_owned()),
            response: Some("4".to_owned()),
            correct_answer: Some("4".to_owned()),
            rating: None,
            num_ratings: None,
            positive_ratings: None,
            negative_ratings: None,
            cumulative_score: None,
        }
    }

    fn bare_item() -> ReviewItem {
        ReviewItem {
            id: ResponseId::Text("resp-9".to_owned()),
            model: None,
            prompt: None,
            response: None,
            correct_answer: None,
            rating: Some(-2),
            num_ratings: None,
            positive_ratings: None,
            negative_ratings: None,
            cumulative_score: None,
        }
    }

    #[test]
    fn view_shows_all_fields() {
        let component = ReviewCardComponent::new();
        let item = full_item();
        let rendered = component.view(&ReviewCardViewContext {
            item: Some(&item),
            max_width: 60,
            max_height: 0,
        });

        assert!(rendered.contains("ID: 7"), "missing id: {rendered}");
        assert!(rendered.contains("[unrated]"), "missing status: {rendered}");
        assert!(rendered.contains("Model: Groq LLaMA3"), "missing model: {rendered}");
        assert!(rendered.contains("What is 2+2?"), "missing prompt: {rendered}");
        assert!(rendered.contains("Expected answer"), "missing answer label: {rendered}");
    }

    #[test]
    fn view_substitutes_placeholders_for_absent_fields() {
        let component = ReviewCardComponent::new();
        let item = bare_item();
        let rendered = component.view(&ReviewCardViewContext {
            item: Some(&item),
            max_width: 60,
            max_height: 0,
        });

        assert!(rendered.contains("ID: resp-9"), "missing id: {rendered}");
        assert!(rendered.contains("[rated: bad]"), "missing status: {rendered}");
        assert!(rendered.contains("(unknown model)"), "missing placeholder: {rendered}");
        assert!(rendered.contains("(no prompt)"), "missing placeholder: {rendered}");
        assert!(rendered.contains("(no response text)"), "missing placeholder: {rendered}");
    }

    #[test]
    fn view_without_selection_shows_placeholder() {
        let component = ReviewCardComponent::new();
        let rendered = component.view(&ReviewCardViewContext {
            item: None,
            max_width: 60,
            max_height: 0,
        });

        assert_eq!(rendered, "(no response selected)\n");
    }

    #[test]
    fn view_truncates_to_height() {
        let component = ReviewCardComponent::new();
        let item = full_item();
        let rendered = component.view(&ReviewCardViewContext {
            item: Some(&item),
            max_width: 60,
            max_height: 4,
        });

        assert!(rendered.lines().count() <= 4, "too tall: {rendered}");
        assert!(rendered.ends_with("...\n"), "missing cut-off marker: {rendered}");
    }
}
