use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wildseries::{
    config::Config,
    db::Store,
    models::{Category, NewEpisode, NewProgram, NewSeason, Program},
    web,
};

async fn spawn_app() -> (Router, Store) {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();

    let store = Store::new(&config.general.database_path)
        .await
        .expect("Failed to open store");
    let state =
        web::create_app_state(config, store.clone(), None).expect("Failed to create app state");
    (web::router(state), store)
}

async fn add_program(store: &Store, title: &str, synopsis: &str, category: &Category) -> Program {
    store
        .add_program(&NewProgram {
            title: title.to_string(),
            synopsis: synopsis.to_string(),
            poster: None,
            category_id: category.id,
        })
        .await
        .unwrap()
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn post_form(app: &Router, uri: &str, fields: &[(&str, &str)]) -> (StatusCode, String) {
    let body = serde_urlencoded::to_string(fields).unwrap();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(
                    header::CONTENT_TYPE,
                    mime::APPLICATION_WWW_FORM_URLENCODED.as_ref(),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_index_lists_programs() {
    let (app, store) = spawn_app().await;
    let horror = store.add_category("Horreur").await.unwrap();
    add_program(&store, "The Walking Dead", "Zombies everywhere", &horror).await;
    add_program(&store, "Penny Dreadful", "Victorian monsters", &horror).await;

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("The Walking Dead"));
    assert!(body.contains("/show/penny-dreadful"));
}

#[tokio::test]
async fn test_index_with_empty_catalogue_is_not_found() {
    let (app, _store) = spawn_app().await;

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("No program found in program"));
}

#[tokio::test]
async fn test_index_search_does_not_filter() {
    let (app, store) = spawn_app().await;
    let horror = store.add_category("Horreur").await.unwrap();
    add_program(&store, "The Walking Dead", "Zombies everywhere", &horror).await;
    add_program(&store, "Penny Dreadful", "Victorian monsters", &horror).await;

    let (status, body) = get(&app, "/?field_name=title&searchField=Penny").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("The Walking Dead"));
    assert!(body.contains("Penny Dreadful"));
    assert!(body.contains("value=\"Penny\""));
}

#[tokio::test]
async fn test_show_program_by_slug() {
    let (app, store) = spawn_app().await;
    let horror = store.add_category("Horreur").await.unwrap();
    let program = add_program(
        &store,
        "The Walking Dead",
        "A sheriff wakes up from a coma",
        &horror,
    )
    .await;
    store
        .add_season(&NewSeason {
            number: 1,
            description: "Days gone bye".to_string(),
            year: 2010,
            program_id: program.id,
        })
        .await
        .unwrap();

    for uri in ["/show/the-walking-dead", "/wild/show/the-walking-dead"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains("A sheriff wakes up from a coma"));
        assert!(body.contains("Saison 1"));
        assert!(body.contains("/wild/category/Horreur"));
    }
}

#[tokio::test]
async fn test_show_unknown_program_is_not_found() {
    let (app, store) = spawn_app().await;
    let horror = store.add_category("Horreur").await.unwrap();
    add_program(&store, "The Walking Dead", "Zombies everywhere", &horror).await;

    let (status, body) = get(&app, "/show/unknown-show").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("No program with Unknown Show title"));
}

#[tokio::test]
async fn test_show_rejects_invalid_slug() {
    let (app, _store) = spawn_app().await;

    let (status, _) = get(&app, "/show/The_Walking_Dead").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_show_rejects_padded_slug() {
    let (app, store) = spawn_app().await;
    let horror = store.add_category("Horreur").await.unwrap();
    add_program(&store, "The Walking Dead", "Zombies everywhere", &horror).await;

    for uri in [
        "/show/%20the-walking-dead",
        "/show/the-walking-dead%09",
        "/wild/show/%20the-walking-dead%20",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body.contains("is not a valid program slug"), "{uri}");
    }

    let (status, _) = get(&app, "/show/the-walking-dead").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_show_without_slug() {
    let (app, _store) = spawn_app().await;

    for uri in ["/show", "/show/", "/show/%20%20"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body.contains("No slug has been sent"), "{uri}");
    }
}

#[tokio::test]
async fn test_category_shows_three_latest_programs() {
    let (app, store) = spawn_app().await;
    let horror = store.add_category("Horreur").await.unwrap();
    let comedy = store.add_category("Comedie").await.unwrap();

    for i in 1..=5 {
        add_program(&store, &format!("Horror Show {i}"), "Scary", &horror).await;
    }
    add_program(&store, "Funny Show", "Not scary", &comedy).await;

    let (status, body) = get(&app, "/wild/category/Horreur").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("Funny Show"));
    assert!(!body.contains("Horror Show 1"));
    assert!(!body.contains("Horror Show 2"));

    let positions: Vec<usize> = ["Horror Show 5", "Horror Show 4", "Horror Show 3"]
        .iter()
        .map(|title| body.find(title).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_category_link_escapes_slash() {
    let (app, store) = spawn_app().await;
    let category = store.add_category("Sci/Fi").await.unwrap();
    add_program(&store, "Battlestar Galactica", "Cylons", &category).await;

    let (status, body) = get(&app, "/show/battlestar-galactica").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("href=\"/wild/category/Sci%2FFi\""));

    let (status, body) = get(&app, "/wild/category/Sci%2FFi").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Battlestar Galactica"));
}

#[tokio::test]
async fn test_unknown_category_is_server_error() {
    let (app, _store) = spawn_app().await;

    let (status, body) = get(&app, "/wild/category/Nope").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.contains("Nope"));
}

#[tokio::test]
async fn test_season_page_mixes_number_and_season_id() {
    let (app, store) = spawn_app().await;
    let horror = store.add_category("Horreur").await.unwrap();
    let program = add_program(&store, "The Walking Dead", "Zombies", &horror).await;

    let first = store
        .add_season(&NewSeason {
            number: 1,
            description: "First season".to_string(),
            year: 2010,
            program_id: program.id,
        })
        .await
        .unwrap();
    let second = store
        .add_season(&NewSeason {
            number: 2,
            description: "Second season".to_string(),
            year: 2011,
            program_id: program.id,
        })
        .await
        .unwrap();
    store
        .add_episode(&NewEpisode {
            title: "Days Gone Bye".to_string(),
            number: 1,
            synopsis: "Pilot".to_string(),
            season_id: first.id,
        })
        .await
        .unwrap();
    store
        .add_episode(&NewEpisode {
            title: "What Lies Ahead".to_string(),
            number: 1,
            synopsis: "Opener".to_string(),
            season_id: second.id,
        })
        .await
        .unwrap();

    let (status, body) = get(&app, &format!("/wild/the-walking-dead/{}", first.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("First season"));
    assert!(body.contains("Days Gone Bye"));
    assert!(!body.contains("What Lies Ahead"));
    assert!(body.contains("/wild/show/the-walking-dead"));
}

#[tokio::test]
async fn test_season_page_without_episode() {
    let (app, _store) = spawn_app().await;

    let (status, body) = get(&app, "/wild/the-walking-dead/42").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Aucun épisode"));
}

#[tokio::test]
async fn test_season_page_rejects_non_numeric_id() {
    let (app, _store) = spawn_app().await;

    let (status, _) = get(&app, "/wild/the-walking-dead/first").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_episode_page_has_breadcrumb() {
    let (app, store) = spawn_app().await;
    let horror = store.add_category("Horreur").await.unwrap();
    let program = add_program(&store, "The Walking Dead", "Zombies", &horror).await;
    let season = store
        .add_season(&NewSeason {
            number: 1,
            description: "First season".to_string(),
            year: 2010,
            program_id: program.id,
        })
        .await
        .unwrap();
    let episode = store
        .add_episode(&NewEpisode {
            title: "Guts".to_string(),
            number: 2,
            synopsis: "Rick is trapped in a department store".to_string(),
            season_id: season.id,
        })
        .await
        .unwrap();

    let (status, body) = get(&app, &format!("/wild/episode/{}", episode.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Guts"));
    assert!(body.contains("Rick is trapped in a department store"));
    assert!(body.contains("href=\"/wild/show/the-walking-dead\""));
    assert!(body.contains("Saison 1"));
}

#[tokio::test]
async fn test_unknown_episode_is_not_found() {
    let (app, _store) = spawn_app().await;

    let (status, _) = get(&app, "/wild/episode/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_category_form_page() {
    let (app, _store) = spawn_app().await;

    let (status, body) = get(&app, "/category/add").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("name=\"name\""));
    assert!(body.contains("action=\"/category/add\""));
}

#[tokio::test]
async fn test_add_category() {
    let (app, store) = spawn_app().await;

    let (status, body) = post_form(&app, "/category/add", &[("name", "Drama")]).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Drama"));
    assert_eq!(store.count_categories_named("Drama").await.unwrap(), 1);

    let (status, _) = get(&app, "/wild/category/Drama").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_add_blank_category_is_rejected() {
    let (app, store) = spawn_app().await;

    let (status, _) = post_form(&app, "/category/add", &[("name", "   ")]).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(store.list_categories().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_post_renders_form() {
    let (app, store) = spawn_app().await;

    let (status, body) = post_form(&app, "/category/add", &[]).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("name=\"name\""));
    assert!(store.list_categories().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_health() {
    let (app, _store) = spawn_app().await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], true);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (app, _store) = spawn_app().await;

    let (status, _) = get(&app, "/nope/nope/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_static_stylesheet() {
    let (app, _store) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/static/app.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/css"
    );
}

#[tokio::test]
async fn test_catalogue_responses_carry_request_id_and_policy() {
    let (app, _store) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/category/add")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    let request_id = headers.get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(request_id.len(), 36);
    assert!(
        headers
            .get("content-security-policy")
            .unwrap()
            .to_str()
            .unwrap()
            .contains("form-action 'self'")
    );
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
}
