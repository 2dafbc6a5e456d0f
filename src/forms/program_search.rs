use serde::{Deserialize, Serialize};

/// Search box shown above the program list.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProgramSearchForm {
    #[serde(default)]
    pub field_name: Option<String>,

    #[serde(default, rename = "searchField")]
    pub search_field: Option<String>,
}

impl ProgramSearchForm {
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.field_name.is_some() || self.search_field.is_some()
    }
}
