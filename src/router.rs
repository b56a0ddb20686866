use crate::modules::grades::router::init_grades_router;
use crate::modules::home::router::init_home_router;
use crate::modules::lecturers::router::init_lecturers_router;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;
use axum::{Router, middleware, routing::get};
use registrar_observability::{logging_middleware, metrics_middleware};
use tower_http::services::ServeDir;

pub fn init_router(state: AppState) -> Router {
    let mut router = Router::new()
        .merge(init_home_router())
        .nest("/students", init_students_router())
        .nest("/grades", init_grades_router())
        .nest("/lecturers", init_lecturers_router());

    if let Some(handle) = state.metrics.clone() {
        router = router.route("/metrics", get(move || std::future::ready(handle.render())));
    }

    router
        .fallback_service(ServeDir::new(&state.static_dir))
        .with_state(state)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
