use roundel_core::Size;
use unicode_segmentation::UnicodeSegmentation;

/// Average advance of one grapheme, in ems.
pub const ADVANCE_EM: f32 = 0.6;
/// Line box height, in ems.
pub const LINE_HEIGHT_EM: f32 = 1.2;

pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Size a single-style label needs for `text`: widest line by line count.
/// Empty text measures zero.
pub fn measure(text: &str, font_size: f32) -> Size {
    if text.is_empty() {
        return Size::ZERO;
    }
    let (lines, widest) = text
        .split('\n')
        .fold((0usize, 0usize), |(n, w), line| (n + 1, w.max(grapheme_count(line))));
    Size {
        width: widest as f32 * ADVANCE_EM * font_size,
        height: lines as f32 * LINE_HEIGHT_EM * font_size,
    }
}

/// Byte index of the grapheme boundary before `byte` (0 at the start).
pub fn prev_grapheme_boundary(text: &str, byte: usize) -> usize {
    let mut last = 0usize;
    for (i, _) in text.grapheme_indices(true) {
        if i >= byte {
            break;
        }
        last = i;
    }
    last
}

/// Byte index of the grapheme boundary after `byte` (the end at most).
pub fn next_grapheme_boundary(text: &str, byte: usize) -> usize {
    for (i, _) in text.grapheme_indices(true) {
        if i > byte {
            return i;
        }
    }
    text.len()
}

/// Editable text with a caret that only ever rests on grapheme boundaries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    caret: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replaces everything; the caret moves to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.text.len();
    }

    pub fn insert_text(&mut self, text: &str) {
        let at = self.caret.min(self.text.len());
        self.text.insert_str(at, text);
        self.caret = at + text.len();
    }

    /// Returns whether anything was deleted.
    pub fn delete_backward(&mut self) -> bool {
        let pos = self.caret.min(self.text.len());
        if pos == 0 {
            return false;
        }
        let prev = prev_grapheme_boundary(&self.text, pos);
        self.text.replace_range(prev..pos, "");
        self.caret = prev;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        let pos = self.caret.min(self.text.len());
        if pos >= self.text.len() {
            return false;
        }
        let next = next_grapheme_boundary(&self.text, pos);
        self.text.replace_range(pos..next, "");
        true
    }

    /// Moves by `delta` graphemes, stopping at either end.
    pub fn move_caret(&mut self, delta: isize) {
        let mut pos = self.caret.min(self.text.len());
        if delta < 0 {
            for _ in 0..delta.unsigned_abs() {
                pos = prev_grapheme_boundary(&self.text, pos);
            }
        } else {
            for _ in 0..delta as usize {
                pos = next_grapheme_boundary(&self.text, pos);
            }
        }
        self.caret = pos;
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.text.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_counts_graphemes_not_bytes() {
        assert_eq!(measure("", 10.0), Size::ZERO);
        let plain = measure("ab", 10.0);
        let cluster = measure("a👍🏽", 10.0);
        assert_eq!(plain, cluster);
        assert!((plain.width - 12.0).abs() < 1e-4);
        assert!((measure("abc\nd", 10.0).height - 24.0).abs() < 1e-4);
    }

    #[test]
    fn buffer_edits_whole_graphemes() {
        let mut buf = TextBuffer::new();
        buf.insert_text("A👍🏽B");
        buf.move_caret(-1);
        assert_eq!(buf.caret(), "A👍🏽".len());
        assert!(buf.delete_backward());
        assert_eq!(buf.text(), "AB");
        assert_eq!(buf.caret(), 1);

        buf.move_home();
        assert!(!buf.delete_backward());
        assert!(buf.delete_forward());
        assert_eq!(buf.text(), "B");
    }
}
