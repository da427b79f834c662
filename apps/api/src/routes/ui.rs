use axum::response::Html;

/// GET /
/// Serves the single-page evaluation form. The page is embedded at compile
/// time; there are no runtime template files.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
