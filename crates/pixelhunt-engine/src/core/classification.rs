use serde::{Deserialize, Serialize};

/// Label attached to every image in the catalog: is it a photo or a
/// photorealistic painting?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Photo,
    Painting,
}

impl Classification {
    /// The opposite label.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Photo => Self::Painting,
            Self::Painting => Self::Photo,
        }
    }
}
