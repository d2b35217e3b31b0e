use super::templates::STYLESHEET;
use super::AppState;
use crate::error::{Result, ScrawlError};
use crate::markdown::Theme;
use crate::model::{ItemId, Listing};
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use chrono::{DateTime, Utc};
use minijinja::context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct MessageForm {
    #[serde(rename = "demo-message")]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LinkForm {
    pub link: String,
}

/// One listing row as the index template sees it.
#[derive(Debug, Serialize)]
struct Row {
    id: String,
    text: String,
    age: String,
    is_url: bool,
}

impl Row {
    fn new(
        id: &ItemId,
        text: String,
        modified: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        let is_url = text.starts_with("http://") || text.starts_with("https://");
        Self {
            id: id.to_string(),
            text,
            age: format_age(modified, now),
            is_url,
        }
    }
}

fn format_age(modified: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match modified {
        Some(ts) => {
            let elapsed = now.signed_duration_since(ts).to_std().unwrap_or_default();
            timeago::Formatter::new().convert(elapsed)
        }
        None => String::new(),
    }
}

/// Plain 302, which is what the forms expect after a POST.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let listing: Listing = state.with_api(|api| api.list_items()).await?;
    let now = Utc::now();

    let notes: Vec<Row> = listing
        .notes
        .into_iter()
        .map(|n| Row::new(&n.id, n.preview, n.modified, now))
        .collect();
    let links: Vec<Row> = listing
        .links
        .into_iter()
        .map(|l| Row::new(&l.id, l.url, l.modified, now))
        .collect();
    let files: Vec<Row> = listing
        .files
        .into_iter()
        .map(|f| Row::new(&f.id, f.filename, f.modified, now))
        .collect();
    let count = notes.len() + links.len() + files.len();

    let page = state.templates().render(
        "index.html",
        &context! { notes, links, files, count },
    )?;
    Ok(Html(page))
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

pub async fn count_files(State(state): State<AppState>) -> Result<String> {
    let count = state.with_api(|api| api.count_items()).await?;
    Ok(count.to_string())
}

pub async fn submit_text(
    State(state): State<AppState>,
    Form(form): Form<MessageForm>,
) -> Result<Response> {
    state.with_api(move |api| api.submit_text(&form.message)).await?;
    Ok(found("/"))
}

pub async fn submit_link(
    State(state): State<AppState>,
    Form(form): Form<LinkForm>,
) -> Result<Response> {
    state.with_api(move |api| api.submit_link(&form.link)).await?;
    Ok(found("/"))
}

/// Keep the body-limit rejection distinguishable from a malformed upload.
fn upload_error(e: MultipartError) -> ScrawlError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ScrawlError::UploadTooLarge(e.body_text())
    } else {
        ScrawlError::Upload(e.body_text())
    }
}

pub async fn submit_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response> {
    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some("file") {
            continue;
        }
        let upload_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(upload_error)?;
        if !upload_name.is_empty() {
            state
                .with_api(move |api| api.submit_file(&upload_name, &bytes))
                .await?;
        }
        break;
    }
    Ok(found("/"))
}

fn print_page_for(state: &AppState, theme: Theme) -> Result<Html<String>> {
    let page = state.templates().render(
        "print.html",
        &context! { theme, action => theme.print_action() },
    )?;
    Ok(Html(page))
}

pub async fn print_page(State(state): State<AppState>) -> Result<Html<String>> {
    print_page_for(&state, Theme::Light)
}

pub async fn darkprint_page(State(state): State<AppState>) -> Result<Html<String>> {
    print_page_for(&state, Theme::Dark)
}

async fn print_into_slot(state: &AppState, text: String, theme: Theme) -> Result<Response> {
    let id = state.with_api(move |api| api.print_text(&text)).await?;
    Ok(found(&theme.render_path(id.as_str())))
}

pub async fn print_text(
    State(state): State<AppState>,
    Form(form): Form<MessageForm>,
) -> Result<Response> {
    print_into_slot(&state, form.message, Theme::Light).await
}

pub async fn darkprint_text(
    State(state): State<AppState>,
    Form(form): Form<MessageForm>,
) -> Result<Response> {
    print_into_slot(&state, form.message, Theme::Dark).await
}

fn render_page(state: &AppState, html: String, theme: Theme) -> Result<Html<String>> {
    let page = state
        .templates()
        .render("render.html", &context! { theme, html })?;
    Ok(Html(page))
}

/// Render posted markdown straight back, without storing it anywhere.
pub async fn render_posted(
    State(state): State<AppState>,
    Form(form): Form<MessageForm>,
) -> Result<Response> {
    if form.message.trim().is_empty() {
        return Ok(found("/"));
    }
    let html = state
        .with_api(move |api| Ok(api.render_text(&form.message, Theme::Light)))
        .await?;
    Ok(render_page(&state, html, Theme::Light)?.into_response())
}

async fn render_stored(state: &AppState, id: String, theme: Theme) -> Result<Html<String>> {
    let html = state
        .with_api(move |api| api.render_item(&id, theme))
        .await?;
    render_page(state, html, theme)
}

pub async fn render_light(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    render_stored(&state, id, Theme::Light).await
}

pub async fn render_dark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    render_stored(&state, id, Theme::Dark).await
}

pub async fn view(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let bytes = state.with_api(move |api| api.view_item(&id)).await?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], bytes).into_response())
}

pub async fn download(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let dl = state.with_api(move |api| api.download_item(&id)).await?;
    let disposition = format!("attachment; filename=\"{}\"", dl.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        dl.bytes,
    )
        .into_response())
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    state.with_api(move |api| api.delete_item(&id)).await?;
    Ok(found("/"))
}
