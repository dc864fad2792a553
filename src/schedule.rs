//! Incremental rehighlight scheduling
//!
//! A [`HighlightMap`] owns one [`BlockRecord`] per document block and
//! decides, after an edit, the minimal contiguous range of blocks to
//! re-tokenize: the coalesced dirty range plus a propagation tail that
//! ends at the first block whose recomputed outgoing state matches its
//! previously recorded one.
//!
//! The engine holds no other document state; the host owns the text and
//! calls in with the blocks as a slice.

use std::ops::Range;

use crate::profile::LanguageProfile;
use crate::rules::LexState;
use crate::tokens::Span;

/// Cached tokenization of one block
#[derive(Debug, Clone, Default)]
pub struct BlockRecord {
    /// State the block was last tokenized with
    pub incoming: LexState,
    /// State at end of block, input for the next block
    pub outgoing: LexState,
    /// Spans from the last tokenization
    pub spans: Vec<Span>,
}

/// Per-document highlight state and rehighlight scheduler
#[derive(Default)]
pub struct HighlightMap {
    /// One record per block, in document order
    records: Vec<BlockRecord>,
    /// Coalesced pending dirty range (union of edits since last refresh)
    dirty: Option<Range<usize>>,
}

impl HighlightMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked blocks
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no blocks are tracked
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Spans of a block as of the last refresh
    pub fn spans(&self, index: usize) -> &[Span] {
        match self.records.get(index) {
            Some(record) => record.spans.as_slice(),
            None => &[],
        }
    }

    /// Record for a block, if tracked
    pub fn record(&self, index: usize) -> Option<&BlockRecord> {
        self.records.get(index)
    }

    /// Queue a range of blocks whose text changed
    ///
    /// Edits arriving before the next [`refresh`](Self::refresh) coalesce
    /// into their union; the scheduler only needs the union and the
    /// minimum starting index.
    pub fn mark_dirty(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        self.dirty = Some(match self.dirty.take() {
            Some(prev) => prev.start.min(range.start)..prev.end.max(range.end),
            None => range,
        });
    }

    /// Track `count` new blocks inserted at `at`
    ///
    /// The inserted blocks and the block that now follows them are queued,
    /// so an insertion always forces at least one downstream comparison.
    pub fn insert_blocks(&mut self, at: usize, count: usize) {
        let at = at.min(self.records.len());
        self.records
            .splice(at..at, std::iter::repeat_with(BlockRecord::default).take(count));
        if let Some(dirty) = &mut self.dirty {
            // Shift a pending range that lies at or past the insertion.
            if dirty.start >= at {
                dirty.start += count;
                dirty.end += count;
            } else if dirty.end > at {
                dirty.end += count;
            }
        }
        self.mark_dirty(at..(at + count + 1).min(self.records.len()).max(at + 1));
    }

    /// Drop records for removed blocks
    ///
    /// The block now at the removal point is queued for the downstream
    /// comparison.
    pub fn remove_blocks(&mut self, range: Range<usize>) {
        let start = range.start.min(self.records.len());
        let end = range.end.min(self.records.len());
        if start >= end {
            return;
        }
        self.records.drain(start..end);
        let removed = end - start;
        if let Some(dirty) = self.dirty.take() {
            let remap = |i: usize| {
                if i <= start {
                    i
                } else {
                    start.max(i - removed)
                }
            };
            self.mark_dirty(remap(dirty.start)..remap(dirty.end));
        }
        if start < self.records.len() {
            self.mark_dirty(start..start + 1);
        } else if start > 0 {
            // Tail removal: the new last block's outgoing state is already
            // recorded; nothing downstream remains to compare.
            self.dirty = self.dirty.take().map(|d| d.start.min(start)..d.end.min(start));
        }
    }

    /// Re-tokenize the pending dirty range plus its propagation tail
    ///
    /// `lines` is the full document, one entry per block. Returns the
    /// sorted indices of blocks whose spans changed (the repaint set).
    /// Propagation past the dirty range stops at the first block whose
    /// recomputed outgoing state equals the recorded one; it never runs
    /// past the end of the document.
    pub fn refresh<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        profile: &LanguageProfile,
    ) -> Vec<usize> {
        // Track blocks appended or truncated behind our back so the map
        // never indexes out of bounds.
        if self.records.len() < lines.len() {
            let old = self.records.len();
            self.records.resize_with(lines.len(), BlockRecord::default);
            self.mark_dirty(old..lines.len());
        } else if self.records.len() > lines.len() {
            self.records.truncate(lines.len());
        }

        let Some(dirty) = self.dirty.take() else {
            return Vec::new();
        };
        let start = dirty.start.min(lines.len());
        let dirty_end = dirty.end.min(lines.len());

        let mut repaint = Vec::new();
        let mut index = start;
        while index < lines.len() {
            let incoming = if index == 0 {
                LexState::Default
            } else {
                self.records[index - 1].outgoing
            };
            let (spans, outgoing) = profile.tokenize(lines[index].as_ref(), incoming);

            let record = &mut self.records[index];
            let outgoing_changed = record.outgoing != outgoing;
            if record.spans != spans {
                repaint.push(index);
            }
            record.incoming = incoming;
            record.outgoing = outgoing;
            record.spans = spans;

            index += 1;
            if index >= dirty_end && !outgoing_changed {
                break;
            }
        }
        repaint
    }

    /// Mark a range dirty and refresh in one call
    pub fn on_edit<S: AsRef<str>>(
        &mut self,
        range: Range<usize>,
        lines: &[S],
        profile: &LanguageProfile,
    ) -> Vec<usize> {
        // An edit notification always covers at least one block.
        let end = range.end.max(range.start + 1);
        self.mark_dirty(range.start..end);
        self.refresh(lines, profile)
    }

    /// Tokenize an entire document from scratch
    pub fn highlight_all<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        profile: &LanguageProfile,
    ) -> Vec<usize> {
        self.records.clear();
        self.records
            .resize_with(lines.len(), BlockRecord::default);
        if lines.is_empty() {
            self.dirty = None;
            return Vec::new();
        }
        self.on_edit(0..lines.len(), lines, profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileSpec;
    use crate::tokens::TokenType;

    fn c_like() -> LanguageProfile {
        ProfileSpec {
            name: "CLike",
            extensions: &["cl"],
            keywords: &["int", "return"],
            line_comment: Some("//"),
            block_comment: Some(("/*", "*/")),
            string_delimiters: &['"'],
            operators: true,
            identifiers: true,
            ..ProfileSpec::default()
        }
        .build()
        .unwrap()
    }

    #[test]
    fn test_highlight_all_and_states() {
        let profile = c_like();
        let mut map = HighlightMap::new();
        let lines = vec!["int a;", "/* open", "inside", "done */ int b;"];
        let repaint = map.highlight_all(&lines, &profile);
        assert_eq!(repaint, vec![0, 1, 2, 3]);
        assert!(map.record(0).unwrap().outgoing.is_default());
        assert_eq!(map.record(1).unwrap().outgoing, LexState::Inside(1));
        assert_eq!(map.record(2).unwrap().outgoing, LexState::Inside(1));
        assert!(map.record(3).unwrap().outgoing.is_default());
    }

    #[test]
    fn test_propagation_stops_when_state_stable() {
        let profile = c_like();
        let mut map = HighlightMap::new();
        let lines = vec!["int a;", "int b;", "int c;", "int d;"];
        map.highlight_all(&lines, &profile);

        let before: Vec<Span> = map.spans(2).to_vec();

        // Editing line 1 without changing its outgoing state repaints
        // only line 1.
        let lines = vec!["int a;", "int 42;", "int c;", "int d;"];
        let repaint = map.on_edit(1..2, &lines, &profile);
        assert_eq!(repaint, vec![1]);
        assert_eq!(map.spans(2), &before[..]);
    }

    #[test]
    fn test_propagation_runs_until_close() {
        let profile = c_like();
        let mut map = HighlightMap::new();
        let lines = vec!["int a;", "int b;", "int c;", "done */ int d;"];
        map.highlight_all(&lines, &profile);

        // Opening a comment on line 0 drags every following line into the
        // comment until the stray closer on line 3.
        let lines = vec!["int a; /*", "int b;", "int c;", "done */ int d;"];
        let repaint = map.on_edit(0..1, &lines, &profile);
        assert_eq!(repaint, vec![0, 1, 2, 3]);
        assert_eq!(map.record(2).unwrap().outgoing, LexState::Inside(1));
        assert_eq!(
            map.spans(1),
            &[Span::new(0, 6, TokenType::Comment)][..]
        );
        assert!(map.record(3).unwrap().outgoing.is_default());
    }

    #[test]
    fn test_closing_edit_heals_downstream() {
        let profile = c_like();
        let mut map = HighlightMap::new();
        let lines = vec!["/* open", "int a;", "int b;"];
        map.highlight_all(&lines, &profile);
        assert_eq!(map.record(2).unwrap().outgoing, LexState::Inside(1));

        let lines = vec!["/* open */", "int a;", "int b;"];
        let repaint = map.on_edit(0..1, &lines, &profile);
        assert_eq!(repaint, vec![0, 1, 2]);
        assert!(map.record(2).unwrap().outgoing.is_default());
        assert_eq!(map.spans(1)[0].token, TokenType::Keyword);
    }

    #[test]
    fn test_idempotent_on_edit() {
        let profile = c_like();
        let mut map = HighlightMap::new();
        let lines = vec!["int a; /*", "still", "done */"];
        map.highlight_all(&lines, &profile);

        let first: Vec<Vec<Span>> = (0..lines.len()).map(|i| map.spans(i).to_vec()).collect();
        let repaint = map.on_edit(0..1, &lines, &profile);
        let second: Vec<Vec<Span>> = (0..lines.len()).map(|i| map.spans(i).to_vec()).collect();
        assert_eq!(first, second);
        // Nothing changed, so nothing needs repainting.
        assert!(repaint.is_empty());
    }

    #[test]
    fn test_edits_coalesce() {
        let profile = c_like();
        let mut map = HighlightMap::new();
        let lines = vec!["int a;", "int b;", "int c;", "int d;", "int e;"];
        map.highlight_all(&lines, &profile);

        let lines = vec!["int 1;", "int b;", "return c;", "int d;", "int e;"];
        map.mark_dirty(0..1);
        map.mark_dirty(2..3);
        let repaint = map.refresh(&lines, &profile);
        // One pass over the union [0, 3); untouched line 1 is re-tokenized
        // but not repainted.
        assert_eq!(repaint, vec![0, 2]);
    }

    #[test]
    fn test_insert_blocks() {
        let profile = c_like();
        let mut map = HighlightMap::new();
        let lines = vec!["/* open", "done */", "int a;"];
        map.highlight_all(&lines, &profile);

        // Insert a line inside the comment.
        let lines = vec!["/* open", "still open", "done */", "int a;"];
        map.insert_blocks(1, 1);
        let repaint = map.refresh(&lines, &profile);
        assert_eq!(map.len(), 4);
        assert!(repaint.contains(&1));
        assert_eq!(
            map.spans(1),
            &[Span::new(0, 10, TokenType::Comment)][..]
        );
        assert!(map.record(3).unwrap().outgoing.is_default());
    }

    #[test]
    fn test_remove_blocks() {
        let profile = c_like();
        let mut map = HighlightMap::new();
        let lines = vec!["/* open", "done */", "int a;"];
        map.highlight_all(&lines, &profile);

        // Deleting the closing line drags the tail into the comment.
        let lines = vec!["/* open", "int a;"];
        map.remove_blocks(1..2);
        let repaint = map.refresh(&lines, &profile);
        assert_eq!(map.len(), 2);
        assert_eq!(repaint, vec![1]);
        assert_eq!(map.record(1).unwrap().outgoing, LexState::Inside(1));
        assert_eq!(map.spans(1), &[Span::new(0, 6, TokenType::Comment)][..]);
    }

    #[test]
    fn test_refresh_without_edits_is_a_no_op() {
        let profile = c_like();
        let mut map = HighlightMap::new();
        let lines = vec!["int a;"];
        map.highlight_all(&lines, &profile);
        assert!(map.refresh(&lines, &profile).is_empty());
    }

    #[test]
    fn test_empty_document() {
        let profile = c_like();
        let mut map = HighlightMap::new();
        let lines: Vec<&str> = Vec::new();
        assert!(map.highlight_all(&lines, &profile).is_empty());
        assert!(map.is_empty());
    }
}
