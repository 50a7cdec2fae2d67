//! HTTP front end: router, handlers, and error mapping.

use std::sync::Arc;

use anyhow::Result;
use askama::Template;
use axum::{
    extract::{FromRequest, Query, Request, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use miniwiki_core::{expand_links, match_path, Page, PageStore, RouteVerb, StoreError};

use crate::config::ServerConfig;
use crate::templates::{EditTemplate, IndexTemplate, ViewTemplate};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PageStore>,
}

/// Build the application router around a page store.
pub fn app(store: PageStore) -> Router {
    let state = AppState {
        store: Arc::new(store),
    };

    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/goto", get(goto_page))
        .route("/goto/", get(goto_page))
        // The page verbs go through the shared path pattern instead of
        // per-route extractors, so title validation happens in one place.
        .fallback(dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: ServerConfig) -> Result<()> {
    let app = app(PageStore::new(config.data_dir.clone()));

    info!(
        addr = %config.listen_addr,
        data_dir = %config.data_dir.display(),
        "miniwiki listening"
    );
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Dispatch `/view`, `/edit`, and `/save` requests.
///
/// Anything that fails the route pattern, including unknown verbs, extra
/// segments, and non-word titles, is a 404. No method enforcement here;
/// the verb in the path is what names the operation.
async fn dispatch(State(state): State<AppState>, req: Request) -> Response {
    let path = req.uri().path().to_string();
    let Some(route) = match_path(&path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match route.verb {
        RouteVerb::View => view_page(&state, &route.title),
        RouteVerb::Edit => edit_page(&state, &route.title),
        RouteVerb::Save => save_page(&state, &route.title, req).await,
    }
}

/// List every stored title on the front page.
async fn index(State(state): State<AppState>) -> Response {
    match state.store.list_titles() {
        Ok(titles) => render(IndexTemplate { titles }),
        Err(e) => internal_error(e),
    }
}

#[derive(Deserialize)]
struct GotoParams {
    #[serde(default)]
    title: String,
}

/// Redirect alias: `/goto/?title=X` sends the browser to `/view/X`.
///
/// The title is passed along verbatim with no validation or existence
/// check; a bad one lands on the view handler's not-found fallback.
async fn goto_page(Query(params): Query<GotoParams>) -> Response {
    found(&format!("/view/{}", params.title))
}

fn view_page(state: &AppState, title: &str) -> Response {
    let page = match state.store.load(title) {
        Ok(page) => page,
        // Missing pages bounce to the edit form rather than erroring.
        Err(StoreError::NotFound(_)) => return found(&format!("/edit/{title}")),
        Err(e) => return internal_error(e),
    };

    let body = expand_links(&page.body).into_owned();
    render(ViewTemplate {
        title: page.title,
        body,
    })
}

fn edit_page(state: &AppState, title: &str) -> Response {
    let page = match state.store.load(title) {
        Ok(page) => page,
        Err(StoreError::NotFound(_)) => Page::empty(title),
        Err(e) => return internal_error(e),
    };

    render(EditTemplate {
        title: page.title,
        body: page.body,
    })
}

#[derive(Deserialize)]
struct SaveForm {
    #[serde(default)]
    body: String,
}

async fn save_page(state: &AppState, title: &str, req: Request) -> Response {
    let Form(form) = match Form::<SaveForm>::from_request(req, &()).await {
        Ok(form) => form,
        Err(rejection) => return rejection.into_response(),
    };

    let page = Page::new(title, form.body);
    if let Err(e) = state.store.save(&page) {
        return internal_error(e);
    }
    found(&format!("/view/{title}"))
}

fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => internal_error(e),
    }
}

/// Plain `302 Found` redirect. `Redirect::to` would send 303, which
/// changes how clients replay the method; the wiki has always used 302.
fn found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}

fn internal_error(err: impl std::fmt::Display) -> Response {
    warn!(%err, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
}
