//! Ordinal display zoom setting.

/// Display zoom level of the grid.
///
/// Purely a UI affordance carried by the store so it survives
/// re-renders; no engine semantics depend on it. Stepping past either end
/// clamps.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ZoomLevel {
    /// Extra small.
    Xs,
    /// Small (the default).
    #[default]
    Sm,
    /// Medium.
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
}

impl ZoomLevel {
    /// All levels from smallest to largest.
    pub const ALL: [Self; 5] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// The next larger level, or `None` at the top end.
    #[must_use]
    pub fn zoomed_in(self) -> Option<Self> {
        match self {
            Self::Xs => Some(Self::Sm),
            Self::Sm => Some(Self::Md),
            Self::Md => Some(Self::Lg),
            Self::Lg => Some(Self::Xl),
            Self::Xl => None,
        }
    }

    /// The next smaller level, or `None` at the bottom end.
    #[must_use]
    pub fn zoomed_out(self) -> Option<Self> {
        match self {
            Self::Xs => None,
            Self::Sm => Some(Self::Xs),
            Self::Md => Some(Self::Sm),
            Self::Lg => Some(Self::Md),
            Self::Xl => Some(Self::Lg),
        }
    }
}
