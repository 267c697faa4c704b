use std::collections::TryReserveError;

use quick_error::quick_error;

quick_error! {
    /// Failures a workload can hit while building its container.
    ///
    /// Every variant means the run needed more memory than it could get.
    #[derive(Debug)]
    pub enum Error {
        /// The [`MemoryBudget`](crate::MemoryBudget) would go over its limit
        InsufficientMemory(requested: usize, limit: usize) {
            display("memory budget exceeded: {} bytes requested, limit is {} bytes", requested, limit)
        }
        /// The allocator refused a fallible reservation
        Reserve(err: TryReserveError) {
            from()
            display("allocation failed: {}", err)
            source(err)
        }
    }
}

impl Error {
    #[inline]
    pub fn is_insufficient_memory(&self) -> bool {
        matches!(self, Error::InsufficientMemory(..) | Error::Reserve(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
