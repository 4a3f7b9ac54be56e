use crate::core::constants::MODEL_PATH;
use crate::core::theme::Variant;

/// Runtime page configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub variant: Variant,
    pub model_path: String,
    pub canvas_id: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            model_path: MODEL_PATH.to_string(),
            canvas_id: "app-canvas".to_string(),
        }
    }
}

impl SiteConfig {
    /// Build from a URL query string such as `?variant=tide&model=/alt.obj`.
    ///
    /// Unknown keys are ignored; unknown variant names keep the default.
    pub fn from_query(query: &str) -> Self {
        let mut cfg = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let mut kv = pair.splitn(2, '=');
            let key = kv.next().unwrap_or("");
            let value = kv.next().unwrap_or("");
            match key {
                "variant" => match Variant::from_name(value) {
                    Some(v) => cfg.variant = v,
                    None => log::warn!("unknown variant `{value}`; using {}", cfg.variant.name()),
                },
                "model" if value.ends_with(".obj") && !value.contains("://") => {
                    cfg.model_path = value.to_string();
                }
                _ => {}
            }
        }
        cfg
    }
}
