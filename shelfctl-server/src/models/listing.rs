//! List window types
//!
//! Listings are bounded by an offset (`start`) and a limit (`count`),
//! ordered by id ascending. The window is validated at construction.

use serde::Deserialize;

/// Maximum rows a single list call may return
const MAX_COUNT: u32 = 100;

/// Default rows per list call
const DEFAULT_COUNT: u32 = 10;

/// Validated list window
#[derive(Debug, Clone, Copy)]
pub struct ListWindow {
    /// Number of rows to skip
    pub start: u32,
    /// Number of rows to return (max 100)
    pub count: u32,
}

impl ListWindow {
    /// Create a list window with validation.
    ///
    /// Count is clamped to 1..=100.
    pub fn new(start: u32, count: u32) -> Self {
        Self {
            start,
            count: count.clamp(1, MAX_COUNT),
        }
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        self.start as u64
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> u32 {
        self.count
    }
}

impl Default for ListWindow {
    fn default() -> Self {
        Self {
            start: 0,
            count: DEFAULT_COUNT,
        }
    }
}

/// Query parameters for list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub start: Option<u32>,
    pub count: Option<u32>,
}

impl From<ListParams> for ListWindow {
    fn from(params: ListParams) -> Self {
        Self::new(
            params.start.unwrap_or(0),
            params.count.unwrap_or(DEFAULT_COUNT),
        )
    }
}
