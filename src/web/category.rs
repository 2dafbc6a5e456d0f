//! Category administration form.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tera::Context;
use tracing::{info, warn};

use super::templates::render;
use super::{AppError, AppState};
use crate::forms::CategoryForm;

fn render_form(
    state: &AppState,
    form: &CategoryForm,
    notice: Option<&str>,
    errors: &[String],
) -> Result<axum::response::Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("form", form);
    context.insert("notice", &notice);
    context.insert("errors", errors);
    render(&state.templates, "wild/add.html", &context)
}

/// `GET /category/add`
pub async fn new_category(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    Ok(render_form(&state, &CategoryForm::default(), None, &[])?.into_response())
}

/// `POST /category/add`
///
/// A submitted name is stored and committed at once; the page is then
/// rendered again with an empty form.
pub async fn add_category(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CategoryForm>,
) -> Result<Response, AppError> {
    if !form.is_submitted() {
        return new_category(State(state)).await;
    }

    let name = match form.name() {
        Ok(name) => name,
        Err(e) => {
            warn!("Rejected category form: {e}");
            let page = render_form(&state, &form, None, &[e.to_string()])?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    let category = state.store().add_category(&name).await?;
    info!(id = category.id, name = %category.name, "Category created");

    let notice = format!("La catégorie « {} » a été ajoutée.", category.name);
    Ok(render_form(&state, &CategoryForm::default(), Some(&notice), &[])?.into_response())
}
