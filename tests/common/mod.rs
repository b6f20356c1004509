#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderName, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mergington::{app, AppState, Registry, SignupPolicy};
use serde_json::Value;
use tower::ServiceExt;

pub fn client() -> Client {
    client_with(SignupPolicy::default())
}

pub fn client_with(policy: SignupPolicy) -> Client {
    let registry = Registry::seeded().unwrap().with_policy(policy);
    Client::new(app(AppState::new(registry)))
}

pub struct Client {
    app: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub location: Option<String>,
    pub allow_origin: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }

    pub fn detail(&self) -> String {
        self.json()["detail"].as_str().unwrap().to_owned()
    }

    pub fn message(&self) -> String {
        self.json()["message"].as_str().unwrap().to_owned()
    }
}

impl Client {
    pub fn new(app: Router) -> Self {
        Self { app }
    }

    pub async fn request(&self, method: Method, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let header_value = |name: HeaderName| {
            response
                .headers()
                .get(name)
                .map(|v| v.to_str().unwrap().to_owned())
        };
        let content_type = header_value(header::CONTENT_TYPE).unwrap_or_default();
        let location = header_value(header::LOCATION);
        let allow_origin = header_value(header::ACCESS_CONTROL_ALLOW_ORIGIN);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            content_type,
            location,
            allow_origin,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri).await
    }

    pub async fn signup(&self, activity: &str, email: &str) -> TestResponse {
        let uri = format!("/activities/{}/signup?email={}", encode(activity), encode(email));
        self.request(Method::POST, &uri).await
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> TestResponse {
        let uri = format!("/activities/{}/unregister?email={}", encode(activity), encode(email));
        self.request(Method::DELETE, &uri).await
    }

    pub async fn participants(&self, activity: &str) -> Vec<String> {
        let activities = self.get("/activities").await.json();
        activities[activity]["participants"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p.as_str().unwrap().to_owned())
            .collect()
    }
}

/// Percent-encodes the few characters the test names and emails use.
pub fn encode(s: &str) -> String {
    s.replace('%', "%25")
        .replace(' ', "%20")
        .replace('+', "%2B")
        .replace('@', "%40")
}

pub const EMAILS: [&str; 4] = [
    "test1@mergington.edu",
    "test2@mergington.edu",
    "test3@mergington.edu",
    "student@mergington.edu",
];
