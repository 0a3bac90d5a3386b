use axum::{extract::Request, http::Method};

const OVERRIDE_PARAM: &str = "_method";

/// Rewrite `POST ...?_method=PUT|PATCH|DELETE` into that method.
///
/// Must wrap the whole router so the rewrite happens before route matching.
pub fn override_method(mut request: Request) -> Request {
    if *request.method() != Method::POST {
        return request;
    }

    let wanted = request
        .uri()
        .query()
        .and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == OVERRIDE_PARAM)
                .map(|(_, value)| value.to_ascii_uppercase())
        });

    let method = match wanted.as_deref() {
        Some("PUT") => Method::PUT,
        Some("PATCH") => Method::PATCH,
        Some("DELETE") => Method::DELETE,
        _ => return request,
    };

    tracing::debug!("Method override POST -> {} for {}", method, request.uri().path());
    *request.method_mut() = method;
    request
}
