//! Config template rendering
//!
//! Fills `{{name}}` placeholders in a template with runtime parameters and
//! writes the concrete config file used to launch a supervised process.
//! Substituted values are never rescanned, so a value containing template
//! syntax lands in the output verbatim.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::{HarnessError, HarnessResult};

/// Renders config templates by substituting `{{name}}` placeholders
#[derive(Debug, Clone)]
pub struct ConfigRenderer {
    params: HashMap<String, String>,
}

/// A written config file plus the parameters that produced it
#[derive(Debug, Clone)]
pub struct RenderedConfig {
    path: PathBuf,
    params: HashMap<String, String>,
}

impl RenderedConfig {
    /// Path of the written config file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Value substituted for `name`, if a parameter was bound under it
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// All substituted parameters
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }
}

impl ConfigRenderer {
    /// Create a renderer with no parameters bound
    pub fn new() -> Self {
        Self { params: HashMap::new() }
    }

    /// Bind a substitution parameter (fluent API)
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Substitute every bound parameter into `template`.
    ///
    /// Each placeholder must be bound and each parameter must match exactly
    /// one placeholder, so the rendered output contains every supplied value
    /// verbatim exactly once.
    pub fn render_to_string(&self, template: &str) -> HarnessResult<String> {
        let mut rendered = String::with_capacity(template.len());
        let mut substituted: HashMap<&str, usize> = HashMap::new();
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                // An unterminated "{{" is literal text, not a placeholder
                break;
            };

            let name = after[..end].trim();
            let Some(value) = self.params.get(name) else {
                return Err(HarnessError::UnboundPlaceholder { name: name.to_string() });
            };

            rendered.push_str(&rest[..start]);
            rendered.push_str(value);
            *substituted.entry(name).or_insert(0) += 1;

            rest = &after[end + 2..];
        }
        rendered.push_str(rest);

        for (name, count) in &substituted {
            if *count > 1 {
                return Err(HarnessError::DuplicatePlaceholder {
                    name: (*name).to_string(),
                    count: *count,
                });
            }
        }

        for name in self.params.keys() {
            if !substituted.contains_key(name.as_str()) {
                return Err(HarnessError::UnusedParameter { name: name.clone() });
            }
        }

        Ok(rendered)
    }

    /// Read the template at `template_path`, substitute parameters, and
    /// write the result to `dest_path`, creating parent directories as
    /// needed. The single file write is the only side effect.
    pub async fn render_file(
        &self,
        template_path: impl AsRef<Path>,
        dest_path: impl AsRef<Path>,
    ) -> HarnessResult<RenderedConfig> {
        let template_path = template_path.as_ref();
        let dest_path = dest_path.as_ref();

        let template =
            fs::read_to_string(template_path)
                .await
                .map_err(|e| HarnessError::TemplateRead {
                    path: template_path.display().to_string(),
                    source: e,
                })?;

        let rendered = self.render_to_string(&template)?;

        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| HarnessError::ConfigWrite {
                    path: dest_path.display().to_string(),
                    source: e,
                })?;
        }

        fs::write(dest_path, &rendered)
            .await
            .map_err(|e| HarnessError::ConfigWrite {
                path: dest_path.display().to_string(),
                source: e,
            })?;

        debug!(
            "📝 Rendered config {} with {} parameter(s)",
            dest_path.display(),
            self.params.len()
        );

        Ok(RenderedConfig {
            path: dest_path.to_path_buf(),
            params: self.params.clone(),
        })
    }
}

impl Default for ConfigRenderer {
    fn default() -> Self {
        Self::new()
    }
}
