//! The styled-text accumulator.
//!
//! [`StyledText`] stores the composed string plus a run list: consecutive
//! byte spans that share one [`Attributes`] map. Runs always cover the whole
//! string, are never empty, and neighbouring runs never carry equal maps, so
//! two values with the same visible text and formatting compare equal no
//! matter how they were assembled.

use std::fmt;
use std::ops::Range;

use tracing::trace;

use crate::attribute::{Attribute, Attributes};
use crate::paragraph::ParagraphStyle;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Run {
    len: usize,
    attributes: Attributes,
}

/// A borrowed view of one attribute run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRef<'a> {
    /// Byte range of the run within [`StyledText::as_str`].
    pub range: Range<usize>,
    pub text: &'a str,
    pub attributes: &'a Attributes,
}

/// Text plus attribute runs, indexed by byte offset.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyledText {
    text: String,
    runs: Vec<Run>,
}

impl StyledText {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unstyled text.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![Run {
                len: text.len(),
                attributes: Attributes::new(),
            }]
        };
        Self { text, runs }
    }

    /// Text carrying `attributes` over its whole length.
    #[must_use]
    pub fn styled(text: impl Into<String>, attributes: Attributes) -> Self {
        let mut styled = Self::new();
        styled.push_str(&text.into(), attributes);
        styled
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append `text` formatted with `attributes`.
    pub fn push_str(&mut self, text: &str, attributes: Attributes) {
        if text.is_empty() {
            return;
        }
        self.text.push_str(text);
        self.push_run(Run {
            len: text.len(),
            attributes,
        });
    }

    /// Append another styled text, keeping its formatting.
    pub fn append(&mut self, other: &StyledText) {
        self.text.push_str(&other.text);
        for run in &other.runs {
            self.push_run(run.clone());
        }
    }

    /// Overlay `attributes` on `range`; existing values under the same keys
    /// are replaced.
    pub fn apply(&mut self, range: Range<usize>, attributes: &Attributes) {
        self.update_range(range, |current| current.merge(attributes));
    }

    /// Fill keys of `attributes` that are unset on `range`.
    pub fn apply_if_absent(&mut self, range: Range<usize>, attributes: &Attributes) {
        self.update_range(range, |current| current.merge_if_absent(attributes));
    }

    /// Run `update` on the attribute map of every run inside `range`,
    /// splitting runs at the range bounds first.
    pub fn update_range(&mut self, range: Range<usize>, mut update: impl FnMut(&mut Attributes)) {
        let range = self.clamp_range(range);
        if range.is_empty() {
            return;
        }
        self.split_at(range.start);
        self.split_at(range.end);

        let mut run_start = 0;
        for run in &mut self.runs {
            if run_start >= range.start && run_start < range.end {
                update(&mut run.attributes);
            }
            run_start += run.len;
        }
        self.coalesce();
    }

    /// Every attribute default set on the whole text, unless already present.
    #[must_use]
    pub fn with_defaults(mut self, defaults: &Attributes) -> Self {
        self.apply_if_absent(0..self.len(), defaults);
        self
    }

    #[must_use]
    pub fn with_default(self, default: Attribute) -> Self {
        self.with_defaults(&Attributes::from(default))
    }

    /// Clamp `range` to the text and widen it to character boundaries.
    ///
    /// The start moves down and the end moves up when they fall inside a
    /// multi-byte character. A reversed range collapses to an empty one at
    /// its (clamped) end.
    #[must_use]
    pub fn clamp_range(&self, range: Range<usize>) -> Range<usize> {
        let mut end = range.end.min(self.text.len());
        while !self.text.is_char_boundary(end) {
            end += 1;
        }
        let mut start = range.start.min(end);
        while !self.text.is_char_boundary(start) {
            start -= 1;
        }
        let clamped = start..end;
        if clamped != range {
            trace!(
                requested_start = range.start,
                requested_end = range.end,
                start,
                end,
                len = self.text.len(),
                "modifier range adjusted"
            );
        }
        clamped
    }

    /// Attributes of the character starting at or spanning `offset`.
    #[must_use]
    pub fn attributes_at(&self, offset: usize) -> Option<&Attributes> {
        let mut run_start = 0;
        for run in &self.runs {
            if offset < run_start + run.len {
                return Some(&run.attributes);
            }
            run_start += run.len;
        }
        None
    }

    /// The paragraph style in effect at `offset`, or the default style.
    #[must_use]
    pub fn paragraph_style_at(&self, offset: usize) -> ParagraphStyle {
        self.attributes_at(offset)
            .and_then(Attributes::paragraph_style)
            .cloned()
            .unwrap_or_default()
    }

    /// Attribute runs in text order.
    pub fn runs(&self) -> impl Iterator<Item = RunRef<'_>> + '_ {
        self.runs.iter().scan(0, move |start, run| {
            let range = *start..*start + run.len;
            *start = range.end;
            Some(RunRef {
                text: &self.text[range.clone()],
                range,
                attributes: &run.attributes,
            })
        })
    }

    /// Number of attribute runs.
    #[must_use]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    fn push_run(&mut self, run: Run) {
        if run.len == 0 {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.attributes == run.attributes => last.len += run.len,
            _ => self.runs.push(run),
        }
    }

    // Ensure a run boundary at `offset`.
    fn split_at(&mut self, offset: usize) {
        if offset == 0 || offset >= self.text.len() {
            return;
        }
        let mut run_start = 0;
        for index in 0..self.runs.len() {
            let run_end = run_start + self.runs[index].len;
            if offset < run_end {
                if offset > run_start {
                    let tail = Run {
                        len: run_end - offset,
                        attributes: self.runs[index].attributes.clone(),
                    };
                    self.runs[index].len = offset - run_start;
                    self.runs.insert(index + 1, tail);
                }
                return;
            }
            run_start = run_end;
        }
    }

    fn coalesce(&mut self) {
        let runs = std::mem::take(&mut self.runs);
        for run in runs {
            self.push_run(run);
        }
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}
