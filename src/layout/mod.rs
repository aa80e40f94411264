//! # Frame Layout
//!
//! Frame-aware pagination. The frame is the fundamental unit of layout:
//! every decision is made with the line budget as a hard constraint, so
//! content flows *into* frames instead of being sliced after the fact.
//!
//! Paragraphs wrap independently (two paragraphs never share a line), but
//! frames pack across paragraphs: a frame may hold the tail of one paragraph
//! and the head of the next, separated by a blank spacer line when capacity
//! allows. The spacer counts toward the budget like any content line.

use tracing::debug;

use crate::config::FrameGeometry;
use crate::text::wrap::wrap;

/// Tracks the lines accumulated for the frame currently being filled.
#[derive(Debug)]
struct FrameCursor {
    lines_per_frame: usize,
    lines: Vec<String>,
}

impl FrameCursor {
    fn new(lines_per_frame: usize) -> Self {
        Self {
            lines_per_frame,
            lines: Vec::with_capacity(lines_per_frame),
        }
    }

    fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn is_full(&self) -> bool {
        self.lines.len() >= self.lines_per_frame
    }

    fn has_room(&self) -> bool {
        self.lines.len() < self.lines_per_frame
    }

    fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Join the buffered lines into one frame text and reset the buffer.
    fn finalize(&mut self) -> String {
        let text = self.lines.join("\n");
        self.lines.clear();
        text
    }
}

/// Paginate cleaned text into an ordered, non-empty sequence of frame texts.
///
/// Each frame text is its lines joined by `\n` and holds at most
/// `geometry.lines_per_frame` lines, each wrapped to
/// `geometry.chars_per_line` width units. Empty input produces exactly one
/// frame containing the empty string; pagination never returns zero frames.
pub fn paginate(cleaned_text: &str, geometry: FrameGeometry) -> Vec<String> {
    if cleaned_text.is_empty() {
        return vec![String::new()];
    }

    let mut frames = Vec::new();
    let mut cursor = FrameCursor::new(geometry.lines_per_frame);

    for paragraph in paragraphs(cleaned_text) {
        for line in wrap(paragraph, geometry.chars_per_line) {
            // Capacity is checked before the append, never after: a frame
            // can fill exactly to the budget but never exceed it, and a
            // paragraph's lines spill into as many frames as they need.
            if cursor.is_full() {
                debug!(frame = frames.len(), "closing full frame");
                frames.push(cursor.finalize());
            }
            cursor.push(line.text);
        }

        // Blank spacer between paragraphs, only when it fits.
        if cursor.has_room() {
            cursor.push(String::new());
        }
    }

    if !cursor.is_empty() {
        frames.push(cursor.finalize());
    }

    if frames.is_empty() {
        vec![String::new()]
    } else {
        frames
    }
}

/// Split cleaned text into paragraphs: maximal non-blank runs separated by
/// blank lines. Entirely blank runs are discarded.
fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(chars_per_line: usize, lines_per_frame: usize) -> FrameGeometry {
        FrameGeometry {
            chars_per_line,
            lines_per_frame,
        }
    }

    fn line_count(frame: &str) -> usize {
        frame.split('\n').count()
    }

    #[test]
    fn empty_input_yields_one_empty_frame() {
        assert_eq!(paginate("", geometry(10, 2)), vec![String::new()]);
    }

    #[test]
    fn single_short_paragraph_fits_one_frame() {
        let frames = paginate("hi there", geometry(10, 4));
        // One content line plus the trailing spacer.
        assert_eq!(frames, vec!["hi there\n"]);
    }

    #[test]
    fn frames_never_exceed_the_line_budget() {
        let text = "one two three four five six seven eight nine ten";
        for lines_per_frame in 1..=4 {
            for frame in paginate(text, geometry(5, lines_per_frame)) {
                assert!(line_count(&frame) <= lines_per_frame);
            }
        }
    }

    #[test]
    fn paragraph_lines_spill_across_frames() {
        // Budget of one line per frame: every wrapped line gets its own
        // frame, and a full cursor leaves no room for the spacer.
        let frames = paginate("alpha beta", geometry(5, 1));
        assert_eq!(frames, vec!["alpha", "beta"]);
    }

    #[test]
    fn spacer_is_inserted_between_paragraphs_when_room_allows() {
        let frames = paginate("A B C\n\nD E", geometry(10, 4));
        assert_eq!(frames, vec!["A B C\n\nD E\n"]);
    }

    #[test]
    fn spacer_counts_toward_capacity() {
        // lines_per_frame = 2: paragraph one takes line 1, its spacer takes
        // line 2, so paragraph two must open a new frame.
        let frames = paginate("A B C\n\nD E", geometry(10, 2));
        assert_eq!(frames, vec!["A B C\n", "D E\n"]);
    }

    #[test]
    fn blank_runs_are_discarded() {
        let frames = paginate("solo\n\n\n\n", geometry(10, 4));
        assert_eq!(frames, vec!["solo\n"]);
    }

    #[test]
    fn paragraph_order_is_preserved() {
        let text = "first one\n\nsecond two\n\nthird three";
        let frames = paginate(text, geometry(12, 3));
        let joined = frames.join("\n");
        let words: Vec<&str> = joined.split_whitespace().collect();
        assert_eq!(
            words,
            ["first", "one", "second", "two", "third", "three"]
        );
    }

    #[test]
    fn pagination_is_deterministic() {
        let text = "some words that will wrap across a few lines\n\nand a second paragraph";
        let a = paginate(text, geometry(8, 3));
        let b = paginate(text, geometry(8, 3));
        assert_eq!(a, b);
    }
}
