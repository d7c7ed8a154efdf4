use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::core::error::{PatternError, PatternResult};

/// Validated size parameter `n` shared by every pattern.
///
/// A `Size` can only be built through validation, so renderers never see
/// `n <= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Size(NonZeroU32);

impl Size {
    pub fn new(n: i64) -> PatternResult<Self> {
        u32::try_from(n)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| {
                debug!(n, "rejected pattern size");
                PatternError::invalid_argument(n.to_string())
            })
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Side length `m = 2n - 1` of the concentric square.
    pub fn grid_dim(self) -> u64 {
        2 * u64::from(self.get()) - 1
    }
}

impl TryFrom<i64> for Size {
    type Error = PatternError;

    fn try_from(n: i64) -> PatternResult<Self> {
        Self::new(n)
    }
}

impl FromStr for Size {
    type Err = PatternError;

    fn from_str(s: &str) -> PatternResult<Self> {
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => Self::new(n).map_err(|_| PatternError::invalid_argument(trimmed)),
            Err(_) => {
                debug!(input = trimmed, "pattern size is not an integer");
                Err(PatternError::invalid_argument(trimmed))
            }
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
