//! Locates fenced `task` regions inside markdown text.

pub(super) const OPENING_FENCE: &str = "```task";
pub(super) const CLOSING_FENCE: &str = "```";

/// One fenced region found in a status file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct FencedBlock<'a> {
    /// Byte offset of the opening fence.
    pub offset: usize,
    /// Text between the opening line and the closing fence, or `None` when
    /// the region is never closed.
    pub inner: Option<&'a str>,
}

/// Iterator over fenced `task` regions in document order.
///
/// An opening fence is the tag followed by optional whitespace up to the end
/// of its line. The region normally ends at the first following line that
/// starts with a closing fence. If another opening line comes first, the
/// region ends at the first closing fence anywhere before it instead, so a
/// fence written at the end of a value line still closes the block. A region
/// with no closing fence at all runs up to the next opening line and is
/// yielded with no inner text.
#[derive(Debug, Clone)]
pub(super) struct FencedBlocks<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> FencedBlocks<'a> {
    pub(super) const fn new(text: &'a str) -> Self {
        Self { text, cursor: 0 }
    }

    const fn finish(&mut self) {
        self.cursor = self.text.len();
    }
}

impl<'a> Iterator for FencedBlocks<'a> {
    type Item = FencedBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.text.get(self.cursor..)?;
            let Some(found) = rest.find(OPENING_FENCE) else {
                self.finish();
                return None;
            };
            let offset = self.cursor + found;
            let tag_end = offset + OPENING_FENCE.len();
            let after_tag = self.text.get(tag_end..)?;

            let Some((tag_tail, body)) = after_tag.split_once('\n') else {
                self.finish();
                return None;
            };
            if !tag_tail.trim().is_empty() {
                // "```tasks" or "```task extra" is some other fence.
                self.cursor = tag_end;
                continue;
            }

            let body_start = tag_end + tag_tail.len() + 1;
            return match locate_closing(body) {
                Closing::Closed {
                    inner_len,
                    consumed,
                } => {
                    let inner = body.get(..inner_len)?;
                    self.cursor = body_start + consumed;
                    Some(FencedBlock {
                        offset,
                        inner: Some(inner),
                    })
                }
                Closing::Unclosed { consumed } => {
                    self.cursor = body_start + consumed;
                    Some(FencedBlock {
                        offset,
                        inner: None,
                    })
                }
            };
        }
    }
}

/// Where a region's body ends, in bytes from the start of the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Closing {
    Closed { inner_len: usize, consumed: usize },
    Unclosed { consumed: usize },
}

fn locate_closing(body: &str) -> Closing {
    let mut line_start = 0;
    let limit = loop {
        let Some(line) = body.get(line_start..) else {
            break body.len();
        };
        if line.starts_with(CLOSING_FENCE) {
            if is_opening_line(line) {
                break line_start;
            }
            return Closing::Closed {
                inner_len: line_start,
                consumed: line_start + CLOSING_FENCE.len(),
            };
        }
        match line.find('\n') {
            Some(newline) => line_start += newline + 1,
            None => break body.len(),
        }
    };

    // No fence starts a line before the next opening: fall back to the
    // first fence anywhere in the region.
    let region = body.get(..limit).unwrap_or_default();
    region.find(CLOSING_FENCE).map_or(
        Closing::Unclosed { consumed: limit },
        |position| Closing::Closed {
            inner_len: position,
            consumed: position + CLOSING_FENCE.len(),
        },
    )
}

fn is_opening_line(line: &str) -> bool {
    line.strip_prefix(OPENING_FENCE).is_some_and(|rest| {
        let tail = rest.split_once('\n').map_or(rest, |(tail, _)| tail);
        tail.trim().is_empty()
    })
}
