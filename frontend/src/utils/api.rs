use async_trait::async_trait;
use gloo_net::http::{Method, Request, Response};
use gloo_net::Error as GlooError;
use web_sys::RequestCredentials;

use crate::checkout::{CheckoutError, CheckoutSession, CheckoutSessionSource, CHECKOUT_SESSIONS_PATH};
use crate::config;

/// Entry point for API calls against the configured backend URL.
pub struct Api;

pub struct RequestWrapper {
    request: Request,
    path: String,
    method: Method,
}

impl RequestWrapper {
    fn new(request: Request, path: &str, method: Method) -> Self {
        Self {
            request: request.credentials(RequestCredentials::Include),
            path: path.to_string(),
            method,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    pub async fn send(self) -> Result<Response, GlooError> {
        gloo_console::log!(format!("{} {}", self.method, self.path));
        let response = self.request.send().await?;
        if !response.ok() {
            gloo_console::log!(format!("{} {} answered {}", self.method, self.path, response.status()));
        }
        Ok(response)
    }
}

impl Api {
    pub fn post(path: &str) -> RequestWrapper {
        Self::request(Method::POST, path)
    }

    fn request(method: Method, path: &str) -> RequestWrapper {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        RequestWrapper::new(Request::new(&full_url).method(method), path, method)
    }
}

/// Everything that goes on the wire for one checkout-session request.
#[derive(Debug, Clone)]
pub struct CheckoutRequestParts {
    pub method: Method,
    pub path: &'static str,
    pub headers: Vec<(&'static str, String)>,
    /// The endpoint takes no payload.
    pub body: Option<String>,
}

pub fn checkout_request_parts(origin: &str) -> CheckoutRequestParts {
    CheckoutRequestParts {
        method: Method::POST,
        path: CHECKOUT_SESSIONS_PATH,
        headers: vec![("origin", origin.to_string())],
        body: None,
    }
}

/// Any non-2xx answer is a failed session request; its body is not read.
pub fn status_error(status: u16) -> Option<CheckoutError> {
    (!(200..300).contains(&status)).then_some(CheckoutError::Status { status })
}

/// Creates checkout sessions through `POST /api/checkout_sessions`.
pub struct HttpCheckoutSessions {
    origin: String,
}

impl HttpCheckoutSessions {
    pub fn from_config() -> Self {
        Self {
            origin: config::checkout_origin().to_string(),
        }
    }
}

#[async_trait(?Send)]
impl CheckoutSessionSource for HttpCheckoutSessions {
    async fn create_session(&self) -> Result<CheckoutSession, CheckoutError> {
        let parts = checkout_request_parts(&self.origin);
        let mut request = Api::request(parts.method, parts.path);
        for (name, value) in &parts.headers {
            request = request.header(name, value);
        }
        let response = request
            .send()
            .await
            .map_err(|e| CheckoutError::Request(e.to_string()))?;
        if let Some(err) = status_error(response.status()) {
            return Err(err);
        }
        response
            .json::<CheckoutSession>()
            .await
            .map_err(|e| CheckoutError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_request_is_a_bodiless_post_with_origin() {
        let parts = checkout_request_parts(config::DEFAULT_CHECKOUT_ORIGIN);

        assert!(matches!(parts.method, Method::POST));
        assert_eq!(parts.path, "/api/checkout_sessions");
        assert_eq!(
            parts.headers,
            vec![("origin", "http://localhost:3000".to_string())]
        );
        assert_eq!(parts.body, None);
    }

    #[test]
    fn origin_header_follows_the_configured_origin() {
        let parts = checkout_request_parts("https://lockin.example");
        assert_eq!(parts.headers[0].1, "https://lockin.example");
    }

    #[test]
    fn non_2xx_answers_are_status_failures() {
        assert_eq!(status_error(200), None);
        assert_eq!(status_error(201), None);
        assert_eq!(status_error(404), Some(CheckoutError::Status { status: 404 }));
        assert_eq!(status_error(500), Some(CheckoutError::Status { status: 500 }));
        assert_eq!(status_error(302), Some(CheckoutError::Status { status: 302 }));
    }
}
