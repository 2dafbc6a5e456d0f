//! Catalogue browsing pages.

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use std::sync::Arc;
use tera::Context;
use tracing::debug;

use super::templates::render;
use super::{AppError, AppState};
use crate::constants::catalogue::CATEGORY_PROGRAM_LIMIT;
use crate::forms::{CategoryForm, ProgramSearchForm};
use crate::models::Program;
use crate::parser::slug::{self, SlugError};

fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::NotFound(format!("No route found for id '{raw}'")))
}

async fn program_by_title(
    state: &AppState,
    title: &str,
    lookup_key: &str,
) -> Result<Program, AppError> {
    state
        .store()
        .find_program_by_title(lookup_key)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No program with {title} title, found in program's table."
            ))
        })
}

/// `GET /`
///
/// The search form is bound and echoed back, but the listing itself is
/// never filtered.
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(search): Query<ProgramSearchForm>,
) -> Result<Html<String>, AppError> {
    let programs = state.store().list_programs().await?;

    if programs.is_empty() {
        return Err(AppError::NotFound(
            "No program found in program's table.".to_string(),
        ));
    }

    if search.is_submitted() {
        debug!(?search, "Program search submitted");
    }

    let mut context = Context::new();
    context.insert("programs", &programs);
    context.insert("form", &search);
    render(&state.templates, "wild/index.html", &context)
}

/// `GET /show` with no slug at all.
pub async fn show_without_slug() -> AppError {
    SlugError::Missing.into()
}

/// `GET /show/{slug}` and `GET /wild/show/{slug}`
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(raw_slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let resolved = slug::resolve(Some(&raw_slug))?;
    let program = program_by_title(&state, &resolved.title, &resolved.lookup_key).await?;

    let store = state.store();
    let category = store.get_category(program.category_id).await?;
    let seasons = store.find_seasons_by_program(program.id).await?;
    let actors = store.find_actors_by_program(program.id).await?;

    let mut context = Context::new();
    context.insert("program", &program);
    context.insert("slug", &resolved.title);
    context.insert("category", &category);
    context.insert("seasons", &seasons);
    context.insert("actors", &actors);
    render(&state.templates, "wild/show.html", &context)
}

/// `GET /wild/category/{category_name}`
///
/// An unknown category name is a server error rather than a 404.
pub async fn show_by_category(
    State(state): State<Arc<AppState>>,
    Path(category_name): Path<String>,
) -> Result<Html<String>, AppError> {
    let store = state.store();

    let category = store
        .find_category_by_name(&category_name)
        .await?
        .ok_or_else(|| AppError::internal(format!("Category '{category_name}' does not exist")))?;

    let programs = store
        .find_programs_by_category(category.id, CATEGORY_PROGRAM_LIMIT)
        .await?;

    let mut context = Context::new();
    context.insert("category", &category);
    context.insert("programs", &programs);
    context.insert("form", &CategoryForm::default());
    render(&state.templates, "wild/category.html", &context)
}

/// `GET /wild/{slug}/{id}`
///
/// `id` selects seasons by their number but episodes by their season id.
pub async fn show_by_season(
    State(state): State<Arc<AppState>>,
    Path((program_slug, raw_id)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&raw_id)?;
    let store = state.store();

    let seasons = store.find_seasons_by_number(id).await?;
    let episode = store.find_first_episode_by_season(id).await?;

    let mut context = Context::new();
    context.insert("episode", &episode);
    context.insert("id", &id);
    context.insert("season", &seasons);
    context.insert("program_slug", &program_slug);
    render(&state.templates, "wild/season.html", &context)
}

/// `GET /wild/episode/{id}`
pub async fn show_episode(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&raw_id)?;
    let store = state.store();

    let episode = store
        .get_episode(id)
        .await?
        .ok_or_else(|| AppError::not_found("Episode", id))?;

    let season = store
        .get_season(episode.season_id)
        .await?
        .ok_or_else(|| AppError::internal(format!("Season {} missing", episode.season_id)))?;

    let program = store
        .get_program(season.program_id)
        .await?
        .ok_or_else(|| AppError::internal(format!("Program {} missing", season.program_id)))?;

    let mut context = Context::new();
    context.insert("season", &season);
    context.insert("program", &program);
    context.insert("episode", &episode);
    context.insert("programTitle", &program.title);
    render(&state.templates, "episode.html", &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12").unwrap(), 12);
        assert!(matches!(parse_id("twelve"), Err(AppError::NotFound(_))));
        assert!(matches!(parse_id(""), Err(AppError::NotFound(_))));
    }
}
