#[cfg(test)]
mod tests {
    use rowan::TextRange;

    use crate::text::{LineIndex, SourceRange};

    #[test]
    fn test_line_col() {
        let code = "---@class A\n---@field 名字 string\n---@return number";
        let index = LineIndex::parse(code);
        assert_eq!(index.line_count(), 3);

        assert_eq!(index.get_line_col(0.into(), code), Some((0, 0)));
        assert_eq!(index.get_line_col(10.into(), code), Some((0, 10)));
        // "名字" is two chars but six bytes
        let offset = code.find(" string").unwrap() as u32;
        assert_eq!(index.get_line_col(offset.into(), code), Some((1, 12)));
        let offset = code.find("number").unwrap() as u32;
        assert_eq!(index.get_line_col(offset.into(), code), Some((2, 11)));
        assert_eq!(index.get_line_col((code.len() as u32 + 1).into(), code), None);
    }

    #[test]
    fn test_line_range() {
        let code = "---@class A\r\n\n---@type B";
        let index = LineIndex::parse(code);
        assert_eq!(index.get_line_range(0, code), Some(SourceRange::new(0, 11)));
        assert_eq!(index.get_line_range(1, code), Some(SourceRange::new(13, 0)));
        let last = index.get_line_range(2, code).unwrap();
        assert_eq!(&code[last.start_offset..last.end_offset()], "---@type B");
        assert_eq!(index.get_line_range(3, code), None);
    }

    #[test]
    fn test_range_line_col() {
        let code = "---@class A\n---@class B : A";
        let index = LineIndex::parse(code);
        let start = code.rfind('A').unwrap() as u32;
        let range = TextRange::new(start.into(), (start + 1).into());
        assert_eq!(
            index.get_range_line_col(range, code),
            Some(((1, 14), (1, 15)))
        );
    }

    #[test]
    fn test_source_range_conversion() {
        let code = "---@param x string";
        let range = SourceRange::from_start_end(10, 11);
        let text_range: TextRange = range.into();
        assert_eq!(&code[text_range], "x");
        assert_eq!(SourceRange::from(text_range), range);
        assert_eq!(range.end_offset(), 11);
    }
}
