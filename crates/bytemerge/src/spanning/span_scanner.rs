//! # Span Scanner

use core::ops::Range;

use crate::{errors::BMResult, spanning::ErrorWrapper, spanning::RegexWrapper};

/// The word segmentation capability.
///
/// Produces ordered, non-overlapping byte ranges over a text.
/// Text between the ranges is not encoded.
pub trait SpanScanner: Send + Sync {
    /// Visit each span of `text`, in order.
    fn for_each_span(
        &self,
        text: &str,
        f: &mut dyn FnMut(Range<usize>),
    ) -> BMResult<()>;

    /// Collect the spans of `text`.
    fn find_spans(
        &self,
        text: &str,
    ) -> BMResult<Vec<Range<usize>>> {
        let mut spans = Vec::new();
        self.for_each_span(text, &mut |range| spans.push(range))?;
        Ok(spans)
    }
}

impl SpanScanner for RegexWrapper {
    fn for_each_span(
        &self,
        text: &str,
        f: &mut dyn FnMut(Range<usize>),
    ) -> BMResult<()> {
        match self {
            Self::Basic(regex) => regex.find_iter(text).for_each(|m| f(m.range())),
            Self::Fancy(regex) => {
                for m in regex.find_iter(text) {
                    let m = m.map_err(ErrorWrapper::from)?;
                    f(m.start()..m.end());
                }
            }
        }
        Ok(())
    }
}
