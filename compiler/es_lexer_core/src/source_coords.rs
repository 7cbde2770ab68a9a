//! Incrementally built offset → (line, column) table.
//!
//! The tokenizer calls [`SourceCoords::add`] each time it consumes a line
//! terminator, so the table only ever covers source that has been scanned.
//! Lookups are dominated by forward scanning, so the last line found is
//! cached and its two successors are checked before falling back to a
//! binary search.
//!
//! Columns are measured in source code units. Converting to UTF-16 columns
//! for UTF-8 sources is the tokenizer's job, since it needs the units.

use std::cell::Cell;

/// Marks the end of the known lines. Real offsets are always smaller.
const SENTINEL: u32 = u32::MAX;

#[derive(Clone, Debug)]
pub struct SourceCoords {
    /// Start offset of each known line, strictly increasing, terminated by
    /// [`SENTINEL`].
    line_start_offsets: Vec<u32>,
    /// Line number of `line_start_offsets[0]`.
    initial_line_num: u32,
    /// Column of the first unit of the first line.
    initial_column: u32,
    /// Index of the line found by the most recent lookup.
    last_index: Cell<usize>,
}

impl SourceCoords {
    pub fn new(initial_line_num: u32, initial_column: u32, initial_offset: u32) -> Self {
        debug_assert!(initial_offset != SENTINEL);
        SourceCoords {
            line_start_offsets: vec![initial_offset, SENTINEL],
            initial_line_num,
            initial_column,
            last_index: Cell::new(0),
        }
    }

    #[inline]
    fn line_num_to_index(&self, line_num: u32) -> usize {
        debug_assert!(line_num >= self.initial_line_num);
        (line_num - self.initial_line_num) as usize
    }

    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by the u32 offset space"
    )]
    fn index_to_line_num(&self, index: usize) -> u32 {
        self.initial_line_num + index as u32
    }

    /// Record that line `line_num` starts at `line_start_offset`.
    ///
    /// Lines must be discovered in order. Re-adding a known line, as
    /// happens when the tokenizer rescans after a seek, does nothing.
    pub fn add(&mut self, line_num: u32, line_start_offset: u32) {
        let line_index = self.line_num_to_index(line_num);
        let sentinel_index = self.line_start_offsets.len() - 1;

        if line_index == sentinel_index {
            debug_assert!(self.line_start_offsets[line_index - 1] < line_start_offset);
            self.line_start_offsets[sentinel_index] = line_start_offset;
            self.line_start_offsets.push(SENTINEL);
        } else {
            debug_assert!(line_index < sentinel_index, "line added out of order");
            debug_assert_eq!(
                self.line_start_offsets.get(line_index).copied(),
                Some(line_start_offset),
                "known line rediscovered at a different offset"
            );
        }
    }

    /// Adopt the lines `other` discovered beyond this table's last line.
    ///
    /// Both tables must describe the same source from the same start, so
    /// their common prefix is identical.
    pub fn fill(&mut self, other: &SourceCoords) {
        debug_assert_eq!(self.line_start_offsets[0], other.line_start_offsets[0]);
        debug_assert_eq!(self.initial_line_num, other.initial_line_num);

        if self.line_start_offsets.len() >= other.line_start_offsets.len() {
            return;
        }

        let sentinel_index = self.line_start_offsets.len() - 1;
        self.line_start_offsets[sentinel_index] = other.line_start_offsets[sentinel_index];
        self.line_start_offsets
            .extend_from_slice(&other.line_start_offsets[sentinel_index + 1..]);
    }

    /// Index of the known line containing `offset`.
    pub fn line_index_of(&self, offset: u32) -> usize {
        let offsets = &self.line_start_offsets;
        // Last real line; its successor is the sentinel.
        let last_line = offsets.len() - 2;
        let cached = self.last_index.get();

        let search_from = if offsets[cached] <= offset {
            // Scanning forward: usually the same line or one just after it.
            let probe_end = (cached + 3).min(last_line + 1);
            for index in cached..probe_end {
                if offset < offsets[index + 1] {
                    self.last_index.set(index);
                    return index;
                }
            }
            probe_end.min(last_line)
        } else {
            0
        };

        // Lines in `search_from..=last_line` starting at or before `offset`.
        let starts_at_or_before =
            offsets[search_from..=last_line].partition_point(|&start| start <= offset);
        let index = (search_from + starts_at_or_before).saturating_sub(1);
        self.last_index.set(index);
        index
    }

    pub fn line_num(&self, offset: u32) -> u32 {
        self.index_to_line_num(self.line_index_of(offset))
    }

    /// Zero-based column of `offset`, in code units.
    pub fn column_index(&self, offset: u32) -> u32 {
        let index = self.line_index_of(offset);
        self.column_index_on_line(index, offset)
    }

    pub fn line_num_and_column_index(&self, offset: u32) -> (u32, u32) {
        let index = self.line_index_of(offset);
        (
            self.index_to_line_num(index),
            self.column_index_on_line(index, offset),
        )
    }

    fn column_index_on_line(&self, index: usize, offset: u32) -> u32 {
        let line_start = self.line_start_offsets[index];
        debug_assert!(offset >= line_start);
        let column = offset.saturating_sub(line_start);
        if index == 0 {
            column + self.initial_column
        } else {
            column
        }
    }

    /// Start offset of the line at `index`.
    pub fn line_start(&self, index: usize) -> u32 {
        self.line_start_offsets[index]
    }

    /// Whether `offset` lies on line `line_num`.
    pub fn is_on_this_line(&self, offset: u32, line_num: u32) -> bool {
        let Some(index) = line_num.checked_sub(self.initial_line_num) else {
            return false;
        };
        let index = index as usize;
        let Some(&start) = self.line_start_offsets.get(index) else {
            return false;
        };
        let next = self
            .line_start_offsets
            .get(index + 1)
            .copied()
            .unwrap_or(SENTINEL);
        start <= offset && offset < next
    }

    /// Number of lines discovered so far.
    pub fn line_count(&self) -> usize {
        self.line_start_offsets.len() - 1
    }

    pub fn initial_line_num(&self) -> u32 {
        self.initial_line_num
    }

    pub fn initial_column(&self) -> u32 {
        self.initial_column
    }
}

#[cfg(test)]
mod tests;
