use crate::modules::houses::controller::{
    create_house, delete_house, get_house, get_house_students, get_houses, update_house,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_houses_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_house).get(get_houses))
        .route(
            "/{id}",
            get(get_house).put(update_house).delete(delete_house),
        )
        .route("/{id}/students", get(get_house_students))
}
