use bemkit::{ClassRequest, Composer, Extra, Modifiers};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Compose a BEM class string.
///
/// Empty `modifiers` or `extra` arrays add nothing.
#[wasm_bindgen(js_name = bem)]
pub fn bem_js(
    block: &str,
    element: Option<String>,
    modifiers: Vec<String>,
    extra: Vec<String>,
) -> String {
    let modifiers = Modifiers::List(modifiers);
    let extra = Extra::List(extra);
    bemkit::bem(block, element.as_deref(), Some(&modifiers), Some(&extra))
}

/// Compose from a JSON request: `{ block, element?, modifiers?, extra? }`.
///
/// `modifiers` may be a string, an array, or a map of booleans.
#[wasm_bindgen(js_name = composeJson)]
pub fn compose_json_js(request: &str) -> Result<String, JsValue> {
    compose_json(request).map_err(|e| JsValue::from_str(&e))
}

fn compose_json(request: &str) -> Result<String, String> {
    let request =
        ClassRequest::from_json(request).map_err(|e| format!("Invalid request: {}", e))?;
    Ok(Composer::new().compose_request(&request))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bem_js() {
        assert_eq!(
            bem_js(
                "heading",
                Some("subtitle".to_string()),
                vec!["large".to_string(), "bold".to_string()],
                vec!["extra".to_string(), "highlight".to_string()],
            ),
            "heading__subtitle heading__subtitle--large heading__subtitle--bold extra highlight"
        );
        assert_eq!(bem_js("card", None, vec![], vec![]), "card");
    }

    #[test]
    fn test_compose_json_flags() {
        let result = compose_json(r#"{"block": "box", "modifiers": {"a": true, "b": false}}"#);
        assert_eq!(result.unwrap(), "box box--a");
    }

    #[test]
    fn test_compose_json_invalid() {
        let err = compose_json("{").unwrap_err();
        assert!(err.starts_with("Invalid request:"));
    }
}
