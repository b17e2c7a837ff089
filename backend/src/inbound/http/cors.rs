//! Cross-origin policy for the browser client.
//!
//! Exactly one origin is allowed. The origin is validated up front because
//! actix-cors only reports a bad origin when each worker builds its app.

use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};
use actix_web::http::{Method, Uri};

use crate::domain::TRACE_ID_HEADER;

/// Rejected CORS origin setting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidOrigin {
    /// `*` was configured.
    #[error("wildcard CORS origin is not allowed")]
    Wildcard,
    /// Not a bare `scheme://host[:port]` origin.
    #[error("CORS origin must be scheme, host and optional port only: {origin}")]
    Malformed {
        /// The rejected value, trimmed.
        origin: String,
    },
}

/// An origin checked to be usable by [`Cors::allowed_origin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedOrigin(String);

impl AllowedOrigin {
    /// Validate `origin`.
    ///
    /// A single trailing `/` is dropped, since browsers never send one in the
    /// `Origin` header.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOrigin`] for `*`, for anything that is not an absolute
    /// URL and for URLs carrying a path or query.
    pub fn parse(origin: &str) -> Result<Self, InvalidOrigin> {
        let origin = origin.trim();
        if origin == "*" {
            return Err(InvalidOrigin::Wildcard);
        }
        let malformed = || InvalidOrigin::Malformed {
            origin: origin.to_owned(),
        };
        let uri: Uri = origin.parse().map_err(|_| malformed())?;
        if uri.scheme().is_none() || uri.host().is_none() || uri.query().is_some() {
            return Err(malformed());
        }
        if !matches!(uri.path(), "" | "/") {
            return Err(malformed());
        }
        let bare = origin.strip_suffix('/').unwrap_or(origin);
        Ok(Self(bare.to_owned()))
    }

    /// The origin exactly as sent back in `Access-Control-Allow-Origin`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// CORS middleware admitting `GET` and `POST` from this origin only.
    ///
    /// The `trace-id` response header is exposed to the browser.
    #[must_use]
    pub fn cors(&self) -> Cors {
        Cors::default()
            .allowed_origin(&self.0)
            .allowed_methods([Method::GET, Method::POST])
            .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
            .expose_headers([HeaderName::from_static(TRACE_ID_HEADER)])
            .max_age(3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::http::header::HeaderMap;
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use rstest::rstest;

    const ORIGIN: &str = "http://localhost:4200";

    fn malformed(origin: &str) -> InvalidOrigin {
        InvalidOrigin::Malformed {
            origin: origin.to_owned(),
        }
    }

    #[rstest]
    #[case("*", InvalidOrigin::Wildcard)]
    #[case("localhost:4200", malformed("localhost:4200"))]
    #[case("not a url", malformed("not a url"))]
    #[case("http://localhost:4200/app", malformed("http://localhost:4200/app"))]
    #[case("http://localhost:4200//", malformed("http://localhost:4200//"))]
    #[case("http://localhost:4200/?x=1", malformed("http://localhost:4200/?x=1"))]
    fn rejects_unusable_origins(#[case] origin: &str, #[case] expected: InvalidOrigin) {
        assert_eq!(AllowedOrigin::parse(origin), Err(expected));
    }

    #[rstest]
    #[case(ORIGIN, ORIGIN)]
    #[case("https://app.example.com", "https://app.example.com")]
    #[case("http://localhost:4200/", ORIGIN)]
    #[case("  https://app.example.com/ ", "https://app.example.com")]
    fn accepts_bare_origins(#[case] origin: &str, #[case] expected: &str) {
        let allowed = AllowedOrigin::parse(origin).expect("origin accepted");
        assert_eq!(allowed.as_str(), expected);
    }

    async fn send(
        origin: &AllowedOrigin,
        request: actix_test::TestRequest,
    ) -> (StatusCode, HeaderMap) {
        let app = actix_test::init_service(
            App::new()
                .wrap(origin.cors())
                .route("/ping", web::get().to(HttpResponse::Ok)),
        )
        .await;
        let response = actix_test::call_service(&app, request.to_request()).await;
        (response.status(), response.headers().clone())
    }

    fn allow_origin(headers: &HeaderMap) -> Option<&[u8]> {
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.as_bytes())
    }

    #[rstest]
    #[actix_web::test]
    async fn preflight_from_allowed_origin_succeeds() {
        let origin = AllowedOrigin::parse(ORIGIN).expect("valid origin");
        let (status, headers) = send(
            &origin,
            actix_test::TestRequest::default()
                .method(Method::OPTIONS)
                .uri("/ping")
                .insert_header((header::ORIGIN, ORIGIN))
                .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(allow_origin(&headers), Some(ORIGIN.as_bytes()));
    }

    #[rstest]
    #[actix_web::test]
    async fn trailing_slash_setting_matches_browser_origin() {
        let origin = AllowedOrigin::parse("http://localhost:4200/").expect("valid origin");
        let (status, headers) = send(
            &origin,
            actix_test::TestRequest::get()
                .uri("/ping")
                .insert_header((header::ORIGIN, ORIGIN)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(allow_origin(&headers), Some(ORIGIN.as_bytes()));
    }

    #[rstest]
    #[actix_web::test]
    async fn foreign_origin_gets_no_allow_header() {
        let origin = AllowedOrigin::parse(ORIGIN).expect("valid origin");
        let (_, headers) = send(
            &origin,
            actix_test::TestRequest::get()
                .uri("/ping")
                .insert_header((header::ORIGIN, "http://evil.example")),
        )
        .await;

        assert!(allow_origin(&headers).is_none());
    }
}
