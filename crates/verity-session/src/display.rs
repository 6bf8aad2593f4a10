//! What the results area currently shows.

use verity_core::AnalysisResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    /// Nothing analyzed or opened yet, or the last analysis failed.
    #[default]
    Empty,
    /// An analysis is in flight.
    Loading,
    Showing(AnalysisResult),
}

impl DisplayState {
    #[must_use]
    pub const fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Showing(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
