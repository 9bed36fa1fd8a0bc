//! Inner content extraction shared by the digest and checksum stages
use flaggate_core::Candidate;

/// Where the inner content sits inside a candidate.
///
/// The candidate must be at least `min_len` bytes long; the inner content
/// is what remains after cutting `head` bytes from the front and `tail`
/// bytes from the back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InnerSpan {
    pub head: usize,
    pub tail: usize,
    pub min_len: usize,
}

impl InnerSpan {
    /// Create a span
    pub fn new(head: usize, tail: usize, min_len: usize) -> Self {
        Self { head, tail, min_len }
    }

    /// `None` when the candidate is shorter than `min_len` or the
    /// delimiters would overlap.
    pub fn extract<'a>(&self, candidate: &Candidate<'a>) -> Option<&'a [u8]> {
        if candidate.len() < self.min_len {
            return None;
        }
        candidate.between(self.head, self.tail)
    }
}
