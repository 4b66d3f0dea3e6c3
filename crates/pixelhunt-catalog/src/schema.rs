use serde::{Deserialize, Serialize};

/// One round as delivered by the catalog collaborator.
///
/// The wire shape predates this program and is accepted as-is; see
/// [`adapt_catalog`](crate::adapt_catalog) for the translation into engine
/// types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRound {
    /// Round variant tag: `two-of-two`, `tinder-like`, or `one-of-three`
    /// (matched case-insensitively).
    #[serde(rename = "type")]
    pub kind: String,
    /// Prompt text shown to the player, opaque to the engine.
    pub question: String,
    /// One entry per displayed image, in display order.
    pub answers: Vec<RawAnswer>,
}

/// One image of a raw round with its ground-truth label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAnswer {
    /// `photo` or `painting` (the legacy alias `paint` is accepted).
    #[serde(rename = "type")]
    pub classification: String,
    pub image: RawImage,
}

/// Where an image lives and how large it renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_wire_shape() {
        let json = r#"
            [{
                "type": "Tinder-Like",
                "question": "Photo or painting?",
                "answers": [{
                    "type": "painting",
                    "image": { "url": "img/1.jpg", "width": 468, "height": 458 }
                }]
            }]
        "#;
        let rounds: Vec<RawRound> = serde_json::from_str(json).unwrap();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].kind, "Tinder-Like");
        assert_eq!(rounds[0].answers[0].classification, "painting");
        assert_eq!(rounds[0].answers[0].image.width, 468);
    }
}
