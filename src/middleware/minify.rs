use axum::{
    body::Body,
    http::{HeaderMap, header},
    response::Response,
};

cfg_if::cfg_if! {
    if #[cfg(not(debug_assertions))] {
        use std::sync::LazyLock;

        /// Closing tags and attribute spacing are kept for the inline scene SVG.
        static PAGE_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            keep_spaces_between_attributes: true,
            minify_doctype: false,
            minify_css: true,
            minify_js: true,
            ..Default::default()
        });
    }
}

/// Whether a response body is an HTML document or fragment.
pub fn is_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.starts_with("text/html"))
}

/// Shrinks the page and toast fragments in release builds. Debug builds
/// serve the templates as written.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    if cfg!(debug_assertions) || !is_html(response.headers()) {
        return response;
    }

    cfg_if::cfg_if! {
        if #[cfg(not(debug_assertions))] {
            let (mut parts, body) = response.into_parts();
            let html = match axum::body::to_bytes(body, usize::MAX).await {
                Ok(html) => html,
                Err(err) => {
                    tracing::error!(err = %err, "Failed to buffer HTML response");
                    return Response::from_parts(parts, Body::empty());
                }
            };

            parts.headers.remove(header::CONTENT_LENGTH);

            Response::from_parts(parts, Body::from(minify_html::minify(&html, &PAGE_CFG)))
        } else {
            response
        }
    }
}
