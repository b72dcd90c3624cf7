//! Widget schema handler

use axum::{extract::State, Json};

use crate::schema::WidgetSchema;
use crate::AppState;

/// Slider ranges, defaults, and dropdown options derived from the
/// loaded artifact. The page builds its inputs from this.
pub async fn get_schema(State(state): State<AppState>) -> Json<WidgetSchema> {
    Json(WidgetSchema::derive(&state.artifact))
}
