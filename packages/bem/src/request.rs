use crate::block::BlockRef;
use crate::error::BemResult;
use crate::extra::Extra;
use crate::modifiers::Modifiers;
use serde::{Deserialize, Serialize};

/// One composition call described as data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRequest {
    pub block: BlockRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Modifiers>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Extra>,
}

impl ClassRequest {
    pub fn new(block: impl Into<BlockRef>) -> Self {
        Self {
            block: block.into(),
            element: None,
            modifiers: None,
            extra: None,
        }
    }

    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    pub fn modifiers(mut self, modifiers: impl Into<Modifiers>) -> Self {
        self.modifiers = Some(modifiers.into());
        self
    }

    pub fn extra(mut self, extra: impl Into<Extra>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    pub fn from_json(json: &str) -> BemResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::Composer;

    #[test]
    fn test_from_json_minimal() {
        let request = ClassRequest::from_json(r#"{"block": "card"}"#).unwrap();
        assert_eq!(request, ClassRequest::new("card"));
    }

    #[test]
    fn test_from_json_full() {
        let json = r#"{
            "block": {"name": "card", "modifiers": ["dark"]},
            "element": "title",
            "modifiers": {"fancy": true, "plain": false},
            "extra": ["inside-card"]
        }"#;
        let request = ClassRequest::from_json(json).unwrap();
        assert_eq!(
            Composer::new().compose_request(&request),
            "card__title card__title--fancy inside-card"
        );
    }

    #[test]
    fn test_from_json_mixed_flag_values() {
        let json = r#"{"block": "box", "modifiers": {"a": 1, "b": false, "c": "yes"}}"#;
        let request = ClassRequest::from_json(json).unwrap();
        assert_eq!(Composer::new().compose_request(&request), "box box--a box--c");
    }

    #[test]
    fn test_from_json_missing_block() {
        assert!(ClassRequest::from_json(r#"{"element": "title"}"#).is_err());
    }

    #[test]
    fn test_builder_matches_json() {
        let built = ClassRequest::new("heading")
            .element("subtitle")
            .modifiers(["large"])
            .extra("x");
        let json = serde_json::to_string(&built).unwrap();
        assert_eq!(ClassRequest::from_json(&json).unwrap(), built);
    }
}
