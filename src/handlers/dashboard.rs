//! Dashboard page handler

use axum::response::Html;

/// The single-page dashboard. Widgets are built client-side from
/// `/api/v1/schema`; every widget change posts to `/api/v1/predict`.
pub async fn page() -> Html<&'static str> {
    Html(include_str!("../../static/dashboard.html"))
}
