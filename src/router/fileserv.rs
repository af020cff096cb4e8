use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, Uri},
    response::IntoResponse,
};
use axum::response::Response as AxumResponse;
use leptos::prelude::*;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::shell;

pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> AxumResponse {
    let root = options.site_root.clone();
    let res = get_static_file(uri, &root).await;

    if res.status() == StatusCode::OK {
        res
    } else {
        let handler = leptos_axum::render_app_to_stream({
            let options = options.clone();
            move || shell(options.clone())
        });
        handler(req).await.into_response()
    }
}

async fn get_static_file(uri: Uri, root: &str) -> AxumResponse {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    // This path is relative to the cargo root
    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => res.into_response(),
    }
}
