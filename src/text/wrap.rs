//! Greedy line wrapping under an integer width budget.
//!
//! Words are atomic: a word is never split across lines, even when it is
//! wider than the budget on its own (it then occupies a single overflowing
//! line). Packing is a one-pass greedy fit with no backtracking, so output
//! order and content depend only on input order.

use super::width::visual_width;

/// A line of words after wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The words joined by single spaces.
    pub text: String,
    /// Estimated visual width, including the joining spaces.
    pub width: usize,
}

/// Wrap one paragraph into lines no wider than `width_budget`.
///
/// An empty (or whitespace-only) paragraph yields no lines.
pub fn wrap(paragraph: &str, width_budget: usize) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in paragraph.split_whitespace() {
        let word_width = visual_width(word);
        let space_width = usize::from(!current.is_empty());

        if current_width + word_width + space_width > width_budget && !current.is_empty() {
            lines.push(Line {
                text: std::mem::take(&mut current),
                width: current_width,
            });
            current.push_str(word);
            current_width = word_width;
        } else {
            if space_width == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += word_width + space_width;
        }
    }

    if !current.is_empty() {
        lines.push(Line {
            text: current,
            width: current_width,
        });
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn empty_paragraph_yields_no_lines() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   \t ", 10).is_empty());
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap("hi there", 10);
        assert_eq!(texts(&lines), ["hi there"]);
        assert_eq!(lines[0].width, 8);
    }

    #[test]
    fn joining_space_counts_toward_the_budget() {
        // "hello world" is 11 units at budget 10, so the space forces a break.
        assert_eq!(texts(&wrap("hello world", 10)), ["hello", "world"]);
    }

    #[test]
    fn exact_fit_is_kept_on_one_line() {
        assert_eq!(texts(&wrap("hello worl", 10)), ["hello worl"]);
    }

    #[test]
    fn over_budget_word_owns_an_overflowing_line() {
        let lines = wrap("a incomprehensibilities b", 10);
        assert_eq!(texts(&lines), ["a", "incomprehensibilities", "b"]);
        assert!(lines[1].width > 10);
    }

    #[test]
    fn leading_over_budget_word_is_not_split() {
        assert_eq!(
            texts(&wrap("incomprehensibilities ok", 10)),
            ["incomprehensibilities", "ok"]
        );
    }

    #[test]
    fn wide_glyphs_consume_two_cells_each() {
        // Each ideograph costs 2, so only two fit per 5-unit line with the
        // joining space.
        assert_eq!(texts(&wrap("中 文 字", 5)), ["中 文", "字"]);
    }

    #[test]
    fn wrapped_lines_respect_the_budget() {
        let text = "the quick brown fox jumps over the lazy dog again and again";
        for line in wrap(text, 15) {
            assert!(line.width <= 15, "line '{}' too wide", line.text);
            assert_eq!(line.width, visual_width(&line.text));
        }
    }

    #[test]
    fn word_order_is_preserved() {
        let text = "one two three four five six seven";
        let joined: Vec<String> = wrap(text, 9)
            .into_iter()
            .flat_map(|l| l.text.split(' ').map(str::to_string).collect::<Vec<_>>())
            .collect();
        let original: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        assert_eq!(joined, original);
    }
}
