use axum::Json;

pub async fn health() -> Json<&'static str> {
    Json("We're Live")
}
