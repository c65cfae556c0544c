pub fn serve(router: axum::Router) -> axum::Router {
    imp::serve(router)
}

#[cfg(not(feature = "bundle"))]
mod imp {
    pub fn serve(router: axum::Router) -> axum::Router {
        log::info!("frontend not bundled; serve it separately with `trunk serve`");
        router
    }
}

#[cfg(feature = "bundle")]
mod imp {
    use axum::{response::IntoResponse, routing::get};

    pub fn serve(router: axum::Router) -> axum::Router {
        router
            .route("/", get(index_html))
            .route("/index.css", get(index_css))
            .route("/taskit-frontend.js", get(index_js))
            .route("/taskit-frontend_bg.wasm", get(index_wasm))
    }

    async fn index_html() -> impl IntoResponse {
        ([("content-type", "text/html")],
            include_str!(concat!(env!("BUNDLE_DIR"), "/index.html")))
    }

    async fn index_css() -> impl IntoResponse {
        ([("content-type", "text/css")],
            include_str!(concat!(env!("BUNDLE_DIR"), "/index.css")))
    }

    async fn index_js() -> impl IntoResponse {
        ([("content-type", "application/javascript")],
            include_str!(concat!(env!("BUNDLE_DIR"), "/taskit-frontend.js")))
    }

    async fn index_wasm() -> impl IntoResponse {
        ([("content-type", "application/wasm")],
            include_bytes!(concat!(env!("BUNDLE_DIR"), "/taskit-frontend_bg.wasm")).as_slice())
    }
}
