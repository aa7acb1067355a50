//! API bookkeeping state

/// Number of tracked API calls currently in flight
///
/// Never negative: decrements saturate at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApiCallStatus(pub u32);

impl ApiCallStatus {
    pub fn begin(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn end(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    pub fn is_loading(self) -> bool {
        self.0 > 0
    }
}

/// Which collections have been fetched at least once
///
/// Separates "not fetched yet" from "fetched and empty".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loaded {
    pub courses: bool,
    pub authors: bool,
}
