use shared::AppConfig;

use super::logging::Logger;

/// `<script type="application/json">` element in index.html holding overrides
pub const CONFIG_ELEMENT_ID: &str = "nexclaw-config";

/// Read the site config embedded in the page, falling back to defaults
pub fn load_config() -> AppConfig {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let Some(text) = text.filter(|text| !text.trim().is_empty()) else {
        return AppConfig::default();
    };

    match AppConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            Logger::warn_with_component("config", &format!("Ignoring invalid site config: {:#}", e));
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_config_element_uses_defaults() {
        assert_eq!(load_config(), AppConfig::default());
    }
}
