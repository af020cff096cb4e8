pub mod fileserv;
pub use fileserv::*;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{AxumRouteListing, LeptosRoutes};

use crate::app::shell;

pub fn new(leptos_routes: Vec<AxumRouteListing>, options: LeptosOptions) -> Router {
    tracing::info!("mounting {} leptos routes", leptos_routes.len());
    Router::new()
        .leptos_routes(&options, leptos_routes, {
            let options = options.clone();
            move || shell(options.clone())
        })
        .fallback(file_and_error_handler)
        .with_state(options)
}
