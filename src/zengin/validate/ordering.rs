//! Record ordering grammar.
//!
//! A document must match `(Header Data* Trailer)* End`:
//!
//! ```text
//!   state        accepts          next
//!   Initial      Header           AfterHeader
//!                End              Finished
//!   AfterHeader  Data             AfterHeader
//!                Trailer          Initial
//!   Finished     (nothing)
//! ```

use thiserror::Error;

use crate::zengin::types::schema::RecordKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderingState {
    /// Start of the document, or just after a Trailer.
    #[default]
    Initial,
    /// Inside a Header..Trailer group.
    AfterHeader,
    /// An End record was seen. Nothing may follow.
    Finished,
}

/// Reported on field 0 of the offending row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderingError {
    #[error("Invalid record type")]
    InvalidRecordType,
    #[error("Expected header or end")]
    ExpectedHeaderOrEnd,
    #[error("Expected data or trailer")]
    ExpectedDataOrTrailer,
    #[error("Unexpected record after end record")]
    RecordAfterEnd,
    #[error("Expected trailer record after this one")]
    ExpectedTrailer,
    #[error("Expected end record after this one")]
    ExpectedEnd,
}

impl OrderingState {
    /// Apply one record to the grammar.
    pub fn transition(self, kind: RecordKind) -> Result<Self, OrderingError> {
        use OrderingState::*;
        match (self, kind) {
            (_, RecordKind::Unknown) => Err(OrderingError::InvalidRecordType),
            (Initial, RecordKind::Header) => Ok(AfterHeader),
            (Initial, RecordKind::End) => Ok(Finished),
            (Initial, _) => Err(OrderingError::ExpectedHeaderOrEnd),
            (AfterHeader, RecordKind::Data) => Ok(AfterHeader),
            (AfterHeader, RecordKind::Trailer) => Ok(Initial),
            (AfterHeader, _) => Err(OrderingError::ExpectedDataOrTrailer),
            (Finished, _) => Err(OrderingError::RecordAfterEnd),
        }
    }

    /// The error to report when the document ends in this state.
    pub fn pending_error(self) -> Option<OrderingError> {
        match self {
            OrderingState::Initial => Some(OrderingError::ExpectedEnd),
            OrderingState::AfterHeader => Some(OrderingError::ExpectedTrailer),
            OrderingState::Finished => None,
        }
    }
}

/// Outcome of running the grammar over a whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingOutcome {
    Accepted,
    /// Scanning stopped at the first bad row.
    Rejected { row_index: usize, error: OrderingError },
    /// Every row was accepted but the document ended early.
    Unfinished { error: OrderingError },
}

/// Run the grammar over a sequence of record kinds. `None` entries are
/// skipped.
pub fn check_ordering<I>(kinds: I) -> OrderingOutcome
where
    I: IntoIterator<Item = Option<RecordKind>>,
{
    let mut state = OrderingState::default();
    for (row_index, kind) in kinds.into_iter().enumerate() {
        let Some(kind) = kind else { continue };
        match state.transition(kind) {
            Ok(next) => state = next,
            Err(error) => return OrderingOutcome::Rejected { row_index, error },
        }
    }
    match state.pending_error() {
        Some(error) => OrderingOutcome::Unfinished { error },
        None => OrderingOutcome::Accepted,
    }
}
