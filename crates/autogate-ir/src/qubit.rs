//! Qubit and time index types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::IrError;

/// Index of a qubit row in a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl QubitId {
    /// The index as a `usize`, for addressing rows.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

impl TryFrom<i64> for QubitId {
    type Error = IrError;

    fn try_from(qubit: i64) -> Result<Self, Self::Error> {
        if qubit < 0 {
            return Err(IrError::NegativeQubit { qubit, time: None });
        }
        u32::try_from(qubit)
            .map(QubitId)
            .map_err(|_| IrError::IndexOverflow { index: qubit })
    }
}

/// Discrete time slot (moment) in a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeIndex(pub u32);

impl TimeIndex {
    /// The index as a `usize`, for addressing columns.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TimeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl From<u32> for TimeIndex {
    fn from(time: u32) -> Self {
        TimeIndex(time)
    }
}

impl TryFrom<i64> for TimeIndex {
    type Error = IrError;

    fn try_from(time: i64) -> Result<Self, Self::Error> {
        if time < 0 {
            return Err(IrError::NegativeTime { time });
        }
        u32::try_from(time)
            .map(TimeIndex)
            .map_err(|_| IrError::IndexOverflow { index: time })
    }
}
