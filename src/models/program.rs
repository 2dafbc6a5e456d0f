use serde::Serialize;

use crate::parser::slug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub id: i32,
    pub title: String,
    pub synopsis: String,
    pub poster: Option<String>,
    pub category_id: i32,
    /// URL slug derived from the title, used by templates to build links.
    pub slug: String,
}

impl Program {
    #[must_use]
    pub fn new(
        id: i32,
        title: String,
        synopsis: String,
        poster: Option<String>,
        category_id: i32,
    ) -> Self {
        let slug = slug::slugify(&title);
        Self {
            id,
            title,
            synopsis,
            poster,
            category_id,
            slug,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewProgram {
    pub title: String,
    pub synopsis: String,
    pub poster: Option<String>,
    pub category_id: i32,
}
