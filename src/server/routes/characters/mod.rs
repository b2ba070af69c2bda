use crate::server::router::HolocronState;
use axum::{
    Router,
    routing::{delete, get, patch, post},
};

pub mod extract;
pub mod handlers;

pub fn router() -> Router<HolocronState> {
    Router::new()
        .route(
            "/characters",
            get(handlers::list_characters).delete(handlers::delete_character),
        )
        .route("/characters/external", get(handlers::external_characters))
        .route("/characters/favorite", patch(handlers::favorite_character))
        .route(
            "/characters/unfavorite",
            patch(handlers::unfavorite_character),
        )
        .route("/characters/favorites", get(handlers::list_favorites))
        .route("/characters/import", post(handlers::import_characters))
        .route("/characters/all", delete(handlers::delete_all_characters))
        .route("/characters/{name}", get(handlers::get_character))
}
