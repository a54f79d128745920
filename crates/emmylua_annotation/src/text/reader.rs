use super::text_range::SourceRange;
use std::str::Chars;

/// Placeholder returned by `current_char`/`next_char` past the end. End of
/// input is decided by position, so a literal NUL in the text is still read.
pub const EOF: char = '\0';

/// Char reader over one annotation line.
///
/// Characters read since the last `reset_buff` form the current token,
/// available through `current_range` and `current_text`:
///
/// ```text
/// line:   - - - @ p a r a m
///               ^^^^^^^^^^^   - tail
///         ^^^^^               - current token after reading `---@`
/// ```
///
/// Ranges are absolute: they are shifted by the start offset of the line
/// inside the whole document, so tokens can be reported without any
/// translation by the caller.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    text: &'a str,
    valid_range: SourceRange,
    chars: Chars<'a>,
    buffer_byte_pos: usize,
    buffer_byte_len: usize,
    current: char,
    next: char,
}

impl<'a> Reader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::new_with_range(text, SourceRange::new(0, text.len()))
    }

    pub fn new_with_range(text: &'a str, range: SourceRange) -> Self {
        assert_eq!(text.len(), range.length);
        let mut chars = text.chars();
        let current = chars.next().unwrap_or(EOF);
        let next = chars.next().unwrap_or(EOF);
        Self {
            text,
            valid_range: range,
            chars,
            buffer_byte_pos: 0,
            buffer_byte_len: 0,
            current,
            next,
        }
    }

    pub fn bump(&mut self) {
        if !self.is_eof() {
            self.buffer_byte_len += self.current.len_utf8();
            self.current = self.next;
            self.next = self.chars.next().unwrap_or(EOF);
        }
    }

    pub fn reset_buff(&mut self) {
        self.buffer_byte_pos += self.buffer_byte_len;
        self.buffer_byte_len = 0;
    }

    pub fn is_eof(&self) -> bool {
        self.buffer_byte_pos + self.buffer_byte_len >= self.text.len()
    }

    pub fn current_char(&self) -> char {
        self.current
    }

    pub fn next_char(&self) -> char {
        self.next
    }

    pub fn current_range(&self) -> SourceRange {
        SourceRange::new(
            self.valid_range.start_offset + self.buffer_byte_pos,
            self.buffer_byte_len,
        )
    }

    pub fn current_text(&self) -> &'a str {
        &self.text[self.buffer_byte_pos..(self.buffer_byte_pos + self.buffer_byte_len)]
    }

    pub fn eat_when(&mut self, ch: char) -> usize {
        self.eat_while(|c| c == ch)
    }

    pub fn consume_char_n_times(&mut self, ch: char, count: usize) -> usize {
        let mut eaten = 0;
        while !self.is_eof() && self.current_char() == ch && eaten < count {
            eaten += 1;
            self.bump();
        }
        eaten
    }

    pub fn eat_while<F>(&mut self, func: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        let mut count = 0;
        while !self.is_eof() && func(self.current_char()) {
            count += 1;
            self.bump();
        }
        count
    }

    pub fn eat_till_end(&mut self) -> usize {
        self.eat_while(|_| true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_and_reset() {
        let mut reader = Reader::new("---@type");
        assert_eq!(reader.consume_char_n_times('-', 3), 3);
        assert_eq!(reader.current_text(), "---");
        reader.reset_buff();
        assert_eq!(reader.current_char(), '@');
        assert_eq!(reader.next_char(), 't');
        reader.bump();
        reader.reset_buff();
        assert_eq!(reader.eat_while(|c| c.is_alphabetic()), 4);
        assert_eq!(reader.current_text(), "type");
        assert!(reader.is_eof());
    }

    #[test]
    fn test_range_is_shifted() {
        let doc = "local a\n---@param x string";
        let line = SourceRange::new(8, doc.len() - 8);
        let mut reader = Reader::new_with_range(&doc[8..], line);
        reader.eat_when('-');
        let range = reader.current_range();
        assert_eq!(range, SourceRange::new(8, 3));
        assert_eq!(&doc[range.start_offset..range.end_offset()], "---");
    }

    #[test]
    fn test_nul_is_not_end_of_input() {
        let mut reader = Reader::new("a\0b");
        assert_eq!(reader.eat_till_end(), 3);
        assert_eq!(reader.current_text(), "a\0b");
        assert!(reader.is_eof());
    }

    #[test]
    fn test_multibyte_chars() {
        let mut reader = Reader::new("名字 x");
        reader.eat_while(|c| !c.is_whitespace());
        assert_eq!(reader.current_text(), "名字");
        assert_eq!(reader.current_range().length, "名字".len());
    }
}
