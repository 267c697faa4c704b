use crate::{Error, Result};

/// Byte accounting shared by every contender during a workload.
///
/// Each stored key is charged at its container's per-key footprint, so a
/// limit makes all three container kinds run out of memory the same way.
/// `None` means unlimited.
#[derive(Debug, Clone, Default)]
pub struct MemoryBudget {
    limit: Option<usize>,
    used: usize,
    peak: usize,
}

impl MemoryBudget {
    #[inline(always)]
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            used: 0,
            peak: 0,
        }
    }

    #[inline(always)]
    pub fn unlimited() -> Self {
        Self::new(None)
    }

    #[inline]
    pub fn charge(&mut self, bytes: usize) -> Result<()> {
        let requested = self.used.saturating_add(bytes);
        if let Some(limit) = self.limit {
            if requested > limit {
                return Err(Error::InsufficientMemory(requested, limit));
            }
        }

        self.used = requested;
        self.peak = self.peak.max(requested);
        Ok(())
    }

    #[inline]
    pub fn release(&mut self, bytes: usize) {
        self.used = self.used.saturating_sub(bytes);
    }

    /// Forget everything charged so far. The limit stays.
    pub fn reset(&mut self) {
        self.used = 0;
        self.peak = 0;
    }

    #[inline(always)]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    #[inline(always)]
    pub fn used(&self) -> usize {
        self.used
    }

    /// Highest `used` value since the last reset
    #[inline(always)]
    pub fn peak(&self) -> usize {
        self.peak
    }
}
