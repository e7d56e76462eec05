//! API client for the backend REST service.
//!
//! Every request goes through the same pipeline: attach the session's bearer
//! token when one is present (and no credential header at all otherwise),
//! fire once, and normalize any failure into [`ApiError`]. A 401 response
//! forces a local logout before the error reaches the caller, so a stale
//! token never lingers past its first rejection.

use std::collections::HashMap;

#[cfg(not(feature = "ssr"))]
use crate::core::models::{LoginRequest, StatusUpdate};
use crate::core::models::{Application, Internship, LoginResponse, NewInternship, SignupRequest};
use crate::core::{ApiError, ApplicationStatus};
#[cfg(not(feature = "ssr"))]
use crate::ui::auth::{AuthContext, use_auth_context};

#[cfg(not(feature = "ssr"))]
fn network_error(err: gloo_net::Error) -> ApiError {
    leptos::logging::log!("request failed: {err}");
    ApiError::network("Network error. Please try again.")
}

/// Attach the bearer credential when a session exists.
#[cfg(not(feature = "ssr"))]
fn with_auth(
    auth: AuthContext,
    builder: gloo_net::http::RequestBuilder,
) -> gloo_net::http::RequestBuilder {
    match auth.token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Convert a non-2xx response into an [`ApiError`], forcing a logout when
/// the token was rejected.
#[cfg(not(feature = "ssr"))]
async fn reject(auth: AuthContext, response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(status, &body);
    if err.is_unauthorized() {
        auth.logout();
    }
    err
}

/// Decode a JSON success body, or normalize the failure.
#[cfg(not(feature = "ssr"))]
async fn into_json<T: serde::de::DeserializeOwned>(
    auth: AuthContext,
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::network(e.to_string()))
    } else {
        Err(reject(auth, response).await)
    }
}

/// Exchange credentials for a bearer token.
#[cfg(not(feature = "ssr"))]
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    use gloo_net::http::Request;

    let auth = use_auth_context();
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post("/api/auth/login")
        .json(&body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    into_json(auth, response).await
}

/// Create an account. Never authenticates; the caller redirects to the
/// login entry point for an explicit sign-in.
#[cfg(not(feature = "ssr"))]
pub async fn signup(request: &SignupRequest) -> Result<(), ApiError> {
    use gloo_net::http::Request;

    let auth = use_auth_context();
    let body = request
        .to_json()
        .map_err(|e| ApiError::network(e.to_string()))?;

    let response = Request::post(request.endpoint())
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    if response.ok() {
        Ok(())
    } else {
        Err(reject(auth, response).await)
    }
}

/// List the signed-in employer's internship postings.
#[cfg(not(feature = "ssr"))]
pub async fn fetch_my_internships() -> Result<Vec<Internship>, ApiError> {
    use gloo_net::http::Request;

    let auth = use_auth_context();
    let response = with_auth(auth, Request::get("/api/employers/my-internships"))
        .send()
        .await
        .map_err(network_error)?;

    into_json(auth, response).await
}

/// List the applications for one internship.
#[cfg(not(feature = "ssr"))]
pub async fn fetch_applications(internship_id: i64) -> Result<Vec<Application>, ApiError> {
    use gloo_net::http::Request;

    let auth = use_auth_context();
    let url = format!("/api/employers/internships/{internship_id}/applications");
    let response = with_auth(auth, Request::get(&url))
        .send()
        .await
        .map_err(network_error)?;

    into_json(auth, response).await
}

/// Load applications for every internship concurrently.
///
/// Each sub-fetch is isolated: a failure degrades to an empty list for that
/// internship and never aborts the batch.
#[cfg(not(feature = "ssr"))]
pub async fn fetch_applications_for_all(
    internships: &[Internship],
) -> HashMap<i64, Vec<Application>> {
    use futures::future::join_all;

    let fetches = internships.iter().map(|internship| {
        let id = internship.id;
        async move { (id, fetch_applications(id).await.unwrap_or_default()) }
    });

    join_all(fetches).await.into_iter().collect()
}

/// Post a new internship; the server echoes it back with its assigned id.
#[cfg(not(feature = "ssr"))]
pub async fn create_internship(internship: &NewInternship) -> Result<Internship, ApiError> {
    use gloo_net::http::Request;

    let auth = use_auth_context();
    let response = with_auth(auth, Request::post("/api/employers/internships"))
        .json(internship)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    into_json(auth, response).await
}

/// Move an application to a new status.
#[cfg(not(feature = "ssr"))]
pub async fn update_application_status(
    application_id: i64,
    status: ApplicationStatus,
) -> Result<Application, ApiError> {
    use gloo_net::http::Request;

    let auth = use_auth_context();
    let url = format!("/api/employers/applications/{application_id}/status");
    let response = with_auth(auth, Request::put(&url))
        .json(&StatusUpdate { status })
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    into_json(auth, response).await
}

// SSR stubs - requests only happen in the browser

#[cfg(feature = "ssr")]
pub async fn login(_email: &str, _password: &str) -> Result<LoginResponse, ApiError> {
    Err(ApiError::network("Login not available on server"))
}

#[cfg(feature = "ssr")]
pub async fn signup(_request: &SignupRequest) -> Result<(), ApiError> {
    Err(ApiError::network("Signup not available on server"))
}

#[cfg(feature = "ssr")]
pub async fn fetch_my_internships() -> Result<Vec<Internship>, ApiError> {
    Err(ApiError::network("Not available on server"))
}

#[cfg(feature = "ssr")]
pub async fn fetch_applications(_internship_id: i64) -> Result<Vec<Application>, ApiError> {
    Err(ApiError::network("Not available on server"))
}

#[cfg(feature = "ssr")]
pub async fn fetch_applications_for_all(
    _internships: &[Internship],
) -> HashMap<i64, Vec<Application>> {
    HashMap::new()
}

#[cfg(feature = "ssr")]
pub async fn create_internship(_internship: &NewInternship) -> Result<Internship, ApiError> {
    Err(ApiError::network("Not available on server"))
}

#[cfg(feature = "ssr")]
pub async fn update_application_status(
    _application_id: i64,
    _status: ApplicationStatus,
) -> Result<Application, ApiError> {
    Err(ApiError::network("Not available on server"))
}
