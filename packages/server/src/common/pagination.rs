//! Cursor-based pagination primitives.
//!
//! Pages are ordered newest first (`created_at DESC, id DESC`). The store is
//! asked for `limit + 1` rows; if the extra row comes back it is cut from the
//! page and its id becomes the cursor, so the next page starts exactly at
//! that row. No count query is ever issued.
//!
//! # Usage
//!
//! ```rust,ignore
//! let rows = store.find_many(&predicate, start_at, limit.fetch_limit()).await?;
//! let (jobs, lookahead) = split_lookahead(rows, limit);
//! let next_cursor = lookahead.map(|job| Cursor::new(job.id).encode());
//! ```

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use job_contract::{PageLimit, ValidationError};
use uuid::Uuid;

use super::JobId;

// ============================================================================
// Cursor
// ============================================================================

/// Opaque cursor for pagination (base64-encoded job id).
///
/// Names the first record of the page it resumes. Callers get no guarantee
/// about what the id itself means outside the active ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor(JobId);

impl Cursor {
    pub fn new(id: JobId) -> Self {
        Cursor(id)
    }

    /// Encode the cursor as a URL-safe base64 string.
    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.0.as_uuid().as_bytes())
    }

    /// Decode a cursor string. Anything that isn't 16 base64-encoded bytes
    /// is rejected as [`ValidationError::InvalidCursor`].
    pub fn decode(s: &str) -> Result<Self, ValidationError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(s)
            .map_err(|_| ValidationError::InvalidCursor)?;
        let uuid = Uuid::from_slice(&bytes).map_err(|_| ValidationError::InvalidCursor)?;
        Ok(Cursor(JobId::from_uuid(uuid)))
    }

    pub fn job_id(&self) -> JobId {
        self.0
    }
}

// ============================================================================
// Lookahead
// ============================================================================

/// Split a `limit + 1` fetch into the page and the lookahead row.
///
/// Returns the first `limit` rows and, if the store returned more, the row
/// right after them. Anything past that row is dropped.
pub fn split_lookahead<T>(mut rows: Vec<T>, limit: PageLimit) -> (Vec<T>, Option<T>) {
    let limit = limit.get();
    if rows.len() <= limit {
        return (rows, None);
    }

    rows.truncate(limit + 1);
    let lookahead = rows.pop();
    (rows, lookahead)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_encode_decode() {
        let id = JobId::new();
        let encoded = Cursor::new(id).encode();
        assert_eq!(Cursor::decode(&encoded).unwrap().job_id(), id);
    }

    #[test]
    fn test_cursor_is_url_safe() {
        let encoded = Cursor::new(JobId::from_uuid(Uuid::from_u128(u128::MAX))).encode();
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }

    #[test]
    fn test_cursor_rejects_garbage() {
        assert_eq!(
            Cursor::decode("!!not base64!!"),
            Err(ValidationError::InvalidCursor)
        );
        // valid base64, wrong length
        assert_eq!(
            Cursor::decode(&URL_SAFE_NO_PAD.encode(b"short")),
            Err(ValidationError::InvalidCursor)
        );
    }

    #[test]
    fn test_split_lookahead_with_extra_row() {
        let limit = PageLimit::new(10).unwrap();
        let rows: Vec<i32> = (1..=11).collect();
        let (page, lookahead) = split_lookahead(rows, limit);
        assert_eq!(page, (1..=10).collect::<Vec<_>>());
        assert_eq!(lookahead, Some(11));
    }

    #[test]
    fn test_split_lookahead_exact_page() {
        let limit = PageLimit::new(10).unwrap();
        let rows: Vec<i32> = (1..=10).collect();
        let (page, lookahead) = split_lookahead(rows, limit);
        assert_eq!(page.len(), 10);
        assert_eq!(lookahead, None);
    }

    #[test]
    fn test_split_lookahead_short_page() {
        let limit = PageLimit::new(10).unwrap();
        let (page, lookahead) = split_lookahead(vec![1, 2, 3], limit);
        assert_eq!(page, vec![1, 2, 3]);
        assert_eq!(lookahead, None);
    }

    #[test]
    fn test_split_lookahead_ignores_overfetch() {
        let limit = PageLimit::new(2).unwrap();
        let (page, lookahead) = split_lookahead(vec![1, 2, 3, 4, 5], limit);
        assert_eq!(page, vec![1, 2]);
        assert_eq!(lookahead, Some(3));
    }
}
