use derive_more::{Display, Error, From, IsVariant, TryInto};

use crate::outcome::{ErrorSet, Member};
use crate::panic::{CapacityOverflowPanic, Fatal, OutOfMemoryPanic};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("out of memory while allocating {bytes} bytes")]
pub struct OutOfMemory {
    pub bytes: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity overflow")]
pub struct CapacityOverflow;

/// The error set of the typed allocation helpers and of
/// [`ArrayList::try_append`](crate::collections::ArrayList::try_append).
#[derive(Debug, Display, Error, From, IsVariant, TryInto, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    OutOfMemory(OutOfMemory),
    CapacityOverflow(CapacityOverflow),
}

impl AllocError {
    /// Escalates the error into the matching fatal condition.
    ///
    /// # Panics
    /// Always.
    #[track_caller]
    pub fn raise(self) -> ! {
        match self {
            AllocError::OutOfMemory(e) => OutOfMemoryPanic { bytes: e.bytes }.raise(),
            AllocError::CapacityOverflow(_) => CapacityOverflowPanic.raise(),
        }
    }
}

impl ErrorSet for AllocError {
    const KINDS: &'static [&'static str] = &["OutOfMemory", "CapacityOverflow"];

    fn slot(&self) -> usize {
        match self {
            AllocError::OutOfMemory(_) => 0,
            AllocError::CapacityOverflow(_) => 1,
        }
    }
}

impl Member<OutOfMemory> for AllocError {
    const SLOT: usize = 0;

    fn get(&self) -> Option<&OutOfMemory> {
        match self {
            AllocError::OutOfMemory(e) => Some(e),
            _ => None,
        }
    }

    fn take(self) -> Result<OutOfMemory, Self> {
        match self {
            AllocError::OutOfMemory(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl Member<CapacityOverflow> for AllocError {
    const SLOT: usize = 1;

    fn get(&self) -> Option<&CapacityOverflow> {
        match self {
            AllocError::CapacityOverflow(e) => Some(e),
            _ => None,
        }
    }

    fn take(self) -> Result<CapacityOverflow, Self> {
        match self {
            AllocError::CapacityOverflow(e) => Ok(e),
            other => Err(other),
        }
    }
}
