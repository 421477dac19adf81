//! Integration tests for blueBox Admin.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`, so no
//! server or network is needed. [`TestApp`] carries the session cookie
//! between requests the way a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bluebox-integration-tests
//! ```

#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

use bluebox_admin::{config::AdminConfig, db::UserRegistry, state::AppState};

/// A response with its body read to a string.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Assert a post/redirect/get redirect back to the dashboard.
    pub fn assert_redirects_home(&self) {
        assert_eq!(self.status, StatusCode::SEE_OTHER, "body: {}", self.body);
        assert_eq!(self.location.as_deref(), Some("/"));
    }
}

/// One browser talking to one app instance.
pub struct TestApp {
    pub state: AppState,
    router: Router,
    cookie: Option<String>,
}

impl TestApp {
    /// App seeded with the sample users.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_state(AppState::new(AdminConfig::default()).unwrap())
    }

    /// App with an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_state(AppState::with_registry(
            AdminConfig::default(),
            UserRegistry::new(),
        ))
    }

    #[must_use]
    pub fn with_state(state: AppState) -> Self {
        Self {
            router: bluebox_admin::app(state.clone()),
            state,
            cookie: None,
        }
    }

    /// Another tab of the same browser: shares the session cookie.
    #[must_use]
    pub fn same_browser(&self) -> Self {
        Self {
            state: self.state.clone(),
            router: self.router.clone(),
            cookie: self.cookie.clone(),
        }
    }

    /// A second browser against the same app: shared registry, own session.
    #[must_use]
    pub fn other_browser(&self) -> Self {
        Self {
            state: self.state.clone(),
            router: self.router.clone(),
            cookie: None,
        }
    }

    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = Request::get(path);
        self.send(request.body(Body::empty()).unwrap()).await
    }

    pub async fn post(&mut self, path: &str) -> TestResponse {
        let request = Request::post(path);
        self.send(request.body(Body::empty()).unwrap()).await
    }

    /// POST `fields` as `application/x-www-form-urlencoded`.
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let request = Request::post(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form_body(fields)))
            .unwrap();
        self.send(request).await
    }

    /// Fill in and submit the modal.
    pub async fn submit_user(&mut self, name: &str, email: &str, user_type: &str) -> TestResponse {
        self.post_form(
            "/users/form",
            &[("name", name), ("email", email), ("user_type", user_type)],
        )
        .await
    }

    /// Render the dashboard, asserting success.
    pub async fn dashboard(&mut self) -> String {
        let response = self.get("/").await;
        assert_eq!(response.status, StatusCode::OK, "body: {}", response.body);
        response.body
    }

    async fn send(&mut self, mut request: Request<Body>) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(header::COOKIE, cookie.parse().unwrap());
        }

        let response = self.router.clone().oneshot(request).await.unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap_or("");
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|value| value.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            location,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

/// Number of user rows in a rendered dashboard.
#[must_use]
pub fn row_count(html: &str) -> usize {
    html.matches("/status\"").count()
}

/// Whether the rendered dashboard shows the modal.
#[must_use]
pub fn modal_open(html: &str) -> bool {
    html.contains("role=\"dialog\"")
}

fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_body_encoding() {
        assert_eq!(
            form_body(&[("name", "Ada Lovelace"), ("email", "ada@x.com")]),
            "name=Ada%20Lovelace&email=ada%40x.com"
        );
    }
}
