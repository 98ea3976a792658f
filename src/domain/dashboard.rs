// Dashboard domain model
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Dashboard {
    pub name: String,
    pub file: PathBuf,
}

/// Replace every `#key#` token in a dashboard document with its value.
/// Plain text replacement, no JSON escaping.
pub fn render_template(document: &str, vars: &HashMap<String, String>) -> String {
    let mut result = document.to_string();
    for (key, value) in vars {
        let placeholder = format!("#{}#", key);
        result = result.replace(&placeholder, value);
    }
    result
}

/// Wrap a dashboard document into `{"overwrite": .., "dashboard": ..}`.
/// The document is spliced in as text; the server judges whether it is valid.
pub fn publish_body(document: &str, overwrite: bool) -> String {
    format!(r#"{{"overwrite":{},"dashboard":{}}}"#, overwrite, document)
}
