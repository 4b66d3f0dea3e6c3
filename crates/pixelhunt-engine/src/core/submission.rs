use crate::MalformedSubmission;

use super::{
    classification::Classification,
    round::{RoundDescriptor, RoundKind},
};

/// A player's answer to one round, shaped per round kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Submission {
    /// One classification per image, in image order.
    TwoChoice { choices: [Classification; 2] },
    /// The classification of the single image.
    SingleChoice { choice: Classification },
    /// Index of the image believed to hold the minority classification.
    OddOneOut { index: usize },
}

/// Decides whether `submission` answers `round` correctly.
///
/// The submission shape is validated against the round kind before anything
/// else; a mismatch (including an out-of-range odd-one-out index) is a
/// [`MalformedSubmission`] and nothing is evaluated.
pub fn evaluate(
    round: &RoundDescriptor,
    submission: &Submission,
) -> Result<bool, MalformedSubmission> {
    match (round.kind(), submission) {
        (RoundKind::TwoChoice, Submission::TwoChoice { choices }) => Ok(choices
            .iter()
            .zip(round.images())
            .all(|(choice, image)| *choice == image.classification())),
        (RoundKind::SingleChoice, Submission::SingleChoice { choice }) => {
            Ok(*choice == round.images()[0].classification())
        }
        (RoundKind::OddOneOut, Submission::OddOneOut { index }) => {
            let image = round.images().get(*index).ok_or(MalformedSubmission)?;
            Ok(image.classification() == round.odd_classification())
        }
        _ => Err(MalformedSubmission),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::round::ImageSpec;

    fn image(classification: Classification) -> ImageSpec {
        ImageSpec::new("img/sample.png", 468, 458, classification)
    }

    fn two_choice(first: Classification, second: Classification) -> RoundDescriptor {
        RoundDescriptor::new(
            RoundKind::TwoChoice,
            "Photo or painting, for each?",
            vec![image(first), image(second)],
        )
        .unwrap()
    }

    fn odd_one_out(classifications: [Classification; 3]) -> RoundDescriptor {
        RoundDescriptor::new(
            RoundKind::OddOneOut,
            "Find the odd one",
            classifications.into_iter().map(image).collect(),
        )
        .unwrap()
    }

    #[test]
    fn two_choice_requires_both_matches() {
        use Classification::{Painting, Photo};
        let round = two_choice(Photo, Painting);

        let both_right = Submission::TwoChoice {
            choices: [Photo, Painting],
        };
        let one_right = Submission::TwoChoice {
            choices: [Photo, Photo],
        };
        assert!(evaluate(&round, &both_right).unwrap());
        assert!(!evaluate(&round, &one_right).unwrap());
    }

    #[test]
    fn single_choice_matches_the_only_image() {
        use Classification::{Painting, Photo};
        let round = RoundDescriptor::new(
            RoundKind::SingleChoice,
            "Photo or painting?",
            vec![image(Painting)],
        )
        .unwrap();

        assert!(evaluate(&round, &Submission::SingleChoice { choice: Painting }).unwrap());
        assert!(!evaluate(&round, &Submission::SingleChoice { choice: Photo }).unwrap());
    }

    #[test]
    fn odd_one_out_picks_the_minority_image() {
        use Classification::{Painting, Photo};

        // Two photos, one painting: the painting at index 1 is the odd pick.
        let round = odd_one_out([Photo, Painting, Photo]);
        assert!(evaluate(&round, &Submission::OddOneOut { index: 1 }).unwrap());
        assert!(!evaluate(&round, &Submission::OddOneOut { index: 0 }).unwrap());

        // Two paintings, one photo: the photo at index 2 is the odd pick.
        let round = odd_one_out([Painting, Painting, Photo]);
        assert!(evaluate(&round, &Submission::OddOneOut { index: 2 }).unwrap());
    }

    #[test]
    fn kind_mismatch_is_malformed() {
        use Classification::Photo;
        let round = two_choice(Photo, Photo);
        let submission = Submission::SingleChoice { choice: Photo };
        assert!(evaluate(&round, &submission).is_err());
    }

    #[test]
    fn out_of_range_index_is_malformed() {
        use Classification::{Painting, Photo};
        let round = odd_one_out([Photo, Painting, Photo]);
        assert!(evaluate(&round, &Submission::OddOneOut { index: 3 }).is_err());
    }
}
