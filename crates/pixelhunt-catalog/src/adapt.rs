use pixelhunt_engine::{
    Classification, ImageSpec, RoundDescriptor, RoundKind, RoundShapeError, ANSWER_COUNT,
};

use crate::schema::RawRound;

/// Why a raw catalog could not be turned into playable rounds.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CatalogError {
    #[display("failed to read catalog: {_0}")]
    Io(std::io::Error),
    #[display("failed to parse catalog JSON: {_0}")]
    Parse(serde_json::Error),
    #[display("unknown round kind {kind:?}")]
    #[from(skip)]
    UnknownKind { kind: String },
    #[display("unknown image classification {classification:?}")]
    #[from(skip)]
    UnknownClassification { classification: String },
    #[display("{_0}")]
    Shape(RoundShapeError),
    #[display("catalog must contain exactly {ANSWER_COUNT} rounds, got {actual}")]
    #[from(skip)]
    RoundCount { actual: usize },
}

fn adapt_kind(raw: &str) -> Result<RoundKind, CatalogError> {
    match raw.to_ascii_lowercase().as_str() {
        "two-of-two" => Ok(RoundKind::TwoChoice),
        "tinder-like" => Ok(RoundKind::SingleChoice),
        "one-of-three" => Ok(RoundKind::OddOneOut),
        _ => Err(CatalogError::UnknownKind {
            kind: raw.to_owned(),
        }),
    }
}

fn adapt_classification(raw: &str) -> Result<Classification, CatalogError> {
    match raw.to_ascii_lowercase().as_str() {
        "photo" => Ok(Classification::Photo),
        // "paint" is the legacy spelling still found in old catalogs.
        "painting" | "paint" => Ok(Classification::Painting),
        _ => Err(CatalogError::UnknownClassification {
            classification: raw.to_owned(),
        }),
    }
}

fn adapt_round(raw: RawRound) -> Result<RoundDescriptor, CatalogError> {
    let kind = adapt_kind(&raw.kind)?;
    let images = raw
        .answers
        .into_iter()
        .map(|answer| {
            let classification = adapt_classification(&answer.classification)?;
            Ok(ImageSpec::new(
                answer.image.url,
                answer.image.width,
                answer.image.height,
                classification,
            ))
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;
    Ok(RoundDescriptor::new(kind, raw.question, images)?)
}

/// Translates the raw catalog into engine rounds.
///
/// Rejects unknown kind or classification strings, per-kind image-count
/// mismatches, and a catalog that is not exactly ten rounds long: the
/// session sequence has ten fixed round slots.
pub fn adapt_catalog(raw: Vec<RawRound>) -> Result<Vec<RoundDescriptor>, CatalogError> {
    if raw.len() != ANSWER_COUNT {
        return Err(CatalogError::RoundCount { actual: raw.len() });
    }
    raw.into_iter().map(adapt_round).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RawAnswer, RawImage};

    fn raw_answer(classification: &str) -> RawAnswer {
        RawAnswer {
            classification: classification.to_owned(),
            image: RawImage {
                url: "img/sample.jpg".to_owned(),
                width: 468,
                height: 458,
            },
        }
    }

    fn raw_round(kind: &str, answers: Vec<RawAnswer>) -> RawRound {
        RawRound {
            kind: kind.to_owned(),
            question: "Photo or painting?".to_owned(),
            answers,
        }
    }

    fn ten_single_choice_rounds() -> Vec<RawRound> {
        (0..10)
            .map(|_| raw_round("tinder-like", vec![raw_answer("photo")]))
            .collect()
    }

    #[test]
    fn maps_kinds_case_insensitively() {
        let mut raw = ten_single_choice_rounds();
        raw[0] = raw_round("TWO-OF-TWO", vec![raw_answer("photo"), raw_answer("paint")]);
        raw[1] = raw_round(
            "One-Of-Three",
            vec![raw_answer("photo"), raw_answer("painting"), raw_answer("photo")],
        );

        let catalog = adapt_catalog(raw).unwrap();
        assert_eq!(catalog[0].kind(), RoundKind::TwoChoice);
        assert_eq!(catalog[1].kind(), RoundKind::OddOneOut);
        assert_eq!(catalog[2].kind(), RoundKind::SingleChoice);
        assert_eq!(
            catalog[0].images()[1].classification(),
            Classification::Painting
        );
    }

    #[test]
    fn rejects_unknown_kind() {
        let mut raw = ten_single_choice_rounds();
        raw[3].kind = "three-of-five".to_owned();
        assert!(matches!(
            adapt_catalog(raw),
            Err(CatalogError::UnknownKind { .. })
        ));
    }

    #[test]
    fn rejects_unknown_classification() {
        let mut raw = ten_single_choice_rounds();
        raw[5].answers[0].classification = "sculpture".to_owned();
        assert!(matches!(
            adapt_catalog(raw),
            Err(CatalogError::UnknownClassification { .. })
        ));
    }

    #[test]
    fn rejects_wrong_image_count() {
        let mut raw = ten_single_choice_rounds();
        raw[0] = raw_round("two-of-two", vec![raw_answer("photo")]);
        assert!(matches!(
            adapt_catalog(raw),
            Err(CatalogError::Shape(_))
        ));
    }

    #[test]
    fn rejects_wrong_round_count() {
        let mut raw = ten_single_choice_rounds();
        raw.pop();
        assert!(matches!(
            adapt_catalog(raw),
            Err(CatalogError::RoundCount { actual: 9 })
        ));
    }
}
