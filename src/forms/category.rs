use serde::{Deserialize, Serialize};

use super::FormError;

const NAME_MAX_LENGTH: usize = 255;

/// Category creation form. Only the name is editable.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CategoryForm {
    #[serde(default)]
    pub name: Option<String>,
}

impl CategoryForm {
    /// A form counts as submitted as soon as its field is present in the
    /// request, even when empty.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.name.is_some()
    }

    /// Trimmed category name ready to be persisted.
    pub fn name(&self) -> Result<String, FormError> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();

        if name.is_empty() {
            return Err(FormError::Blank("name"));
        }

        if name.chars().count() > NAME_MAX_LENGTH {
            return Err(FormError::TooLong {
                field: "name",
                max: NAME_MAX_LENGTH,
            });
        }

        Ok(name.to_string())
    }
}
