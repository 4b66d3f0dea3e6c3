use serde::{Deserialize, Serialize};

use crate::RoundShapeError;

use super::classification::Classification;

/// The three round variants of the game.
///
/// Each variant fixes how many images are shown and what kind of answer the
/// player gives:
///
/// - [`TwoChoice`](Self::TwoChoice) - two images, each classified
///   independently; both must be right
/// - [`SingleChoice`](Self::SingleChoice) - one image, one classification
/// - [`OddOneOut`](Self::OddOneOut) - three images, pick the one whose
///   classification is in the minority
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
    derive_more::IsVariant,
)]
pub enum RoundKind {
    #[display("two-choice")]
    TwoChoice,
    #[display("single-choice")]
    SingleChoice,
    #[display("odd-one-out")]
    OddOneOut,
}

impl RoundKind {
    /// Number of images a round of this kind must carry.
    #[must_use]
    pub const fn image_count(self) -> usize {
        match self {
            Self::TwoChoice => 2,
            Self::SingleChoice => 1,
            Self::OddOneOut => 3,
        }
    }
}

/// One image of a round: where to find it, its display size, and the
/// ground-truth classification the player has to guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSpec {
    source_ref: String,
    width: u32,
    height: u32,
    classification: Classification,
}

impl ImageSpec {
    #[must_use]
    pub fn new(
        source_ref: impl Into<String>,
        width: u32,
        height: u32,
        classification: Classification,
    ) -> Self {
        Self {
            source_ref: source_ref.into(),
            width,
            height,
            classification,
        }
    }

    #[must_use]
    pub fn source_ref(&self) -> &str {
        &self.source_ref
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub const fn classification(&self) -> Classification {
        self.classification
    }
}

/// One quiz round: the variant, the prompt shown to the player, and the
/// images with their ground truth. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDescriptor {
    kind: RoundKind,
    prompt: String,
    images: Vec<ImageSpec>,
}

impl RoundDescriptor {
    /// Builds a round, rejecting an image count that does not match `kind`.
    pub fn new(
        kind: RoundKind,
        prompt: impl Into<String>,
        images: Vec<ImageSpec>,
    ) -> Result<Self, RoundShapeError> {
        let expected = kind.image_count();
        if images.len() != expected {
            return Err(RoundShapeError::ImageCount {
                kind,
                expected,
                actual: images.len(),
            });
        }
        Ok(Self {
            kind,
            prompt: prompt.into(),
            images,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> RoundKind {
        self.kind
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn images(&self) -> &[ImageSpec] {
        &self.images
    }

    /// The classification held by the minority of this round's images.
    ///
    /// If paintings strictly outnumber photos the odd image is the photo;
    /// otherwise (including a 2-1 photo majority and the degenerate all-same
    /// case) the odd image is the painting.
    #[must_use]
    pub fn odd_classification(&self) -> Classification {
        let paintings = self
            .images
            .iter()
            .filter(|image| image.classification().is_painting())
            .count();
        let photos = self.images.len() - paintings;
        if paintings > photos {
            Classification::Photo
        } else {
            Classification::Painting
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(classification: Classification) -> ImageSpec {
        ImageSpec::new("img/sample.png", 468, 458, classification)
    }

    #[test]
    fn new_rejects_wrong_image_count() {
        let result = RoundDescriptor::new(
            RoundKind::TwoChoice,
            "Photo or painting?",
            vec![image(Classification::Photo)],
        );
        assert!(matches!(
            result,
            Err(RoundShapeError::ImageCount {
                kind: RoundKind::TwoChoice,
                expected: 2,
                actual: 1,
            })
        ));
    }

    #[test]
    fn new_accepts_matching_image_count() {
        for (kind, count) in [
            (RoundKind::TwoChoice, 2),
            (RoundKind::SingleChoice, 1),
            (RoundKind::OddOneOut, 3),
        ] {
            let images = vec![image(Classification::Photo); count];
            let round = RoundDescriptor::new(kind, "prompt", images).unwrap();
            assert_eq!(round.images().len(), count);
        }
    }

    #[test]
    fn odd_classification_follows_minority() {
        let round = RoundDescriptor::new(
            RoundKind::OddOneOut,
            "Find the painting",
            vec![
                image(Classification::Photo),
                image(Classification::Painting),
                image(Classification::Photo),
            ],
        )
        .unwrap();
        assert_eq!(round.odd_classification(), Classification::Painting);

        let round = RoundDescriptor::new(
            RoundKind::OddOneOut,
            "Find the photo",
            vec![
                image(Classification::Painting),
                image(Classification::Painting),
                image(Classification::Photo),
            ],
        )
        .unwrap();
        assert_eq!(round.odd_classification(), Classification::Photo);
    }

    #[test]
    fn odd_classification_all_same_defaults_to_painting() {
        let round = RoundDescriptor::new(
            RoundKind::OddOneOut,
            "Trick question",
            vec![image(Classification::Photo); 3],
        )
        .unwrap();
        // No image carries the odd classification, so every pick is wrong.
        assert_eq!(round.odd_classification(), Classification::Painting);
    }
}
