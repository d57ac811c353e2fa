//! Storage port — the whole-document persistence contract for hotel records.

use std::future::Future;

use stayhub_domain::error::StayHubError;
use stayhub_domain::hotel::HotelRecord;

/// Persistence of the hotel document as a single unit.
///
/// There are deliberately only two operations: callers read the full ordered
/// sequence, compute a new value, and write the full sequence back. A
/// transactional backend can be swapped in behind this contract without
/// touching any caller. No in-process lock coordinates concurrent
/// read-modify-write cycles; the last full-document write wins.
pub trait HotelStore {
    /// Read every record in the document.
    ///
    /// Must return an empty sequence — not an error — when no document has
    /// been persisted yet.
    fn read_all(&self) -> impl Future<Output = Result<Vec<HotelRecord>, StayHubError>> + Send;

    /// Replace the document with `hotels`, atomically from the caller's
    /// perspective: a concurrent reader never observes a partially-written
    /// sequence.
    fn write_all(
        &self,
        hotels: Vec<HotelRecord>,
    ) -> impl Future<Output = Result<(), StayHubError>> + Send;
}
