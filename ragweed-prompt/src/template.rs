use std::collections::HashMap;

use regex::Regex;
use thiserror::Error;

use ragweed_core::Value;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("invalid template pattern: {0}")]
    Pattern(String),
}

/// A fixed template with `{{var}}` placeholders.
///
/// Rendering is pure: the same template and variables always produce the
/// same string. Missing variables render as the empty string; substituted
/// values are inserted verbatim and never re-expanded.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn render(&self, vars: &HashMap<String, Value>) -> Result<String, TemplateError> {
        let pattern = Regex::new(r"\{\{\s*(\w+)\s*\}\}")
            .map_err(|err| TemplateError::Pattern(err.to_string()))?;
        let rendered = pattern.replace_all(&self.template, |caps: &regex::Captures| {
            let key = &caps[1];
            match vars.get(key) {
                Some(value) => value
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| value.to_string()),
                None => String::new(),
            }
        });
        Ok(rendered.to_string())
    }
}
