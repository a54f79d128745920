use rowan::TextRange;

/// Byte range inside the text handed to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRange {
    pub start_offset: usize,
    pub length: usize,
}

impl SourceRange {
    pub fn new(start_offset: usize, length: usize) -> SourceRange {
        SourceRange {
            start_offset,
            length,
        }
    }

    pub fn from_start_end(start_offset: usize, end_offset: usize) -> Self {
        assert!(start_offset <= end_offset);
        Self::new(start_offset, end_offset - start_offset)
    }

    pub fn end_offset(&self) -> usize {
        self.start_offset + self.length
    }
}

impl From<SourceRange> for TextRange {
    fn from(val: SourceRange) -> Self {
        TextRange::new(
            (val.start_offset as u32).into(),
            (val.end_offset() as u32).into(),
        )
    }
}

impl From<TextRange> for SourceRange {
    fn from(val: TextRange) -> Self {
        SourceRange::new(val.start().into(), val.len().into())
    }
}
