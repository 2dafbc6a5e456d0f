use anyhow::Context as _;
use axum::response::Html;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

use super::AppError;
use crate::parser::slug;

#[derive(RustEmbed)]
#[folder = "templates/"]
struct TemplateAssets;

/// Builds the template engine from the templates compiled into the binary.
pub fn build() -> anyhow::Result<Tera> {
    let mut sources = Vec::new();
    for path in TemplateAssets::iter() {
        let file = TemplateAssets::get(&path)
            .with_context(|| format!("Embedded template vanished: {path}"))?;
        let source = String::from_utf8(file.data.into_owned())
            .with_context(|| format!("Template is not valid UTF-8: {path}"))?;
        sources.push((path.to_string(), source));
    }

    let mut tera = Tera::default();
    tera.add_raw_templates(sources)
        .context("Failed to parse templates")?;
    tera.register_filter("slug", slug_filter);

    Ok(tera)
}

pub fn render(tera: &Tera, name: &str, context: &Context) -> Result<Html<String>, AppError> {
    Ok(Html(tera.render(name, context)?))
}

/// `{{ program.title | slug }}`
fn slug_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let title = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("Filter `slug` expects a string"))?;
    Ok(Value::String(slug::slugify(title)))
}
