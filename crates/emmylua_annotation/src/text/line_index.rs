use rowan::{TextRange, TextSize};

use super::SourceRange;

/// Maps byte offsets of a comment block to zero-based line/column pairs.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_offsets: Vec<TextSize>,
    line_only_ascii_vec: Vec<bool>,
    text_len: TextSize,
}

impl LineIndex {
    pub fn parse(text: &str) -> LineIndex {
        let mut line_offsets = vec![TextSize::from(0)];
        let mut line_only_ascii_vec = Vec::new();

        let mut is_line_only_ascii = true;
        for (i, c) in text.char_indices() {
            if c == '\n' {
                line_offsets.push(TextSize::from((i + 1) as u32));
                line_only_ascii_vec.push(is_line_only_ascii);
                is_line_only_ascii = true;
            } else if !c.is_ascii() {
                is_line_only_ascii = false;
            }
        }

        line_only_ascii_vec.push(is_line_only_ascii);

        assert_eq!(line_offsets.len(), line_only_ascii_vec.len());
        LineIndex {
            line_offsets,
            line_only_ascii_vec,
            text_len: TextSize::from(text.len() as u32),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    pub fn get_line_offset(&self, line: usize) -> Option<TextSize> {
        self.line_offsets.get(line).copied()
    }

    /// Range of `line` without its line terminator (`\n` or `\r\n`).
    pub fn get_line_range(&self, line: usize, source_text: &str) -> Option<SourceRange> {
        let start = usize::from(self.get_line_offset(line)?);
        let mut end = match self.line_offsets.get(line + 1) {
            Some(next) => usize::from(*next) - 1,
            None => usize::from(self.text_len),
        };
        if end > start && source_text.as_bytes()[end - 1] == b'\r' {
            end -= 1;
        }

        Some(SourceRange::from_start_end(start, end))
    }

    // get line base 0
    pub fn get_line(&self, offset: TextSize) -> Option<usize> {
        if offset > self.text_len {
            return None;
        }

        match self.line_offsets.binary_search(&offset) {
            Ok(line) => Some(line),
            Err(line) => Some(line - 1),
        }
    }

    fn is_line_only_ascii(&self, line: usize) -> bool {
        self.line_only_ascii_vec.get(line).copied().unwrap_or(false)
    }

    // get line and col base 0, col counted in chars
    pub fn get_line_col(&self, offset: TextSize, source_text: &str) -> Option<(usize, usize)> {
        let line = self.get_line(offset)?;
        let start_offset = self.line_offsets[line];
        if self.is_line_only_ascii(line) {
            Some((line, usize::from(offset - start_offset)))
        } else {
            let text = &source_text[usize::from(start_offset)..usize::from(offset)];
            Some((line, text.chars().count()))
        }
    }

    /// Start and end `(line, col)` of a range, the form editors expect for
    /// diagnostics and go-to-definition targets.
    pub fn get_range_line_col(
        &self,
        range: TextRange,
        source_text: &str,
    ) -> Option<((usize, usize), (usize, usize))> {
        let start = self.get_line_col(range.start(), source_text)?;
        let end = self.get_line_col(range.end(), source_text)?;
        Some((start, end))
    }
}
