//! REST helpers for the remote backend.
//!
//! Browser builds issue real HTTP calls via `gloo-net`; non-WASM builds
//! (native unit tests) compile against stub bodies that report failure,
//! since the endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Helpers return `Option`/`Result<_, String>` so callers degrade to empty
//! lists or user-facing messages instead of panicking. [`fetch_profile`] is
//! the one place that distinguishes an explicit 401 from every other
//! failure: a 401 ends the session, anything else leaves the stored token
//! alone.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthSuccess, RegisterRequest, RoutePlan, RouteStop, School, SendEmailRequest, User};
use crate::state::session::ResolveOutcome;

#[cfg(target_arch = "wasm32")]
use std::future::Future;

#[cfg(target_arch = "wasm32")]
use super::types::LoginRequest;

/// Milliseconds before an in-flight request is abandoned as failed.
#[cfg(target_arch = "wasm32")]
const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[cfg(target_arch = "wasm32")]
const UNREACHABLE_MSG: &str = "the server could not be reached";
#[cfg(target_arch = "wasm32")]
const UNREADABLE_MSG: &str = "the server returned an unreadable response";

/// Extract a user-facing message from an `{error}` / `{message}` shaped
/// body, preferring `error`.
pub fn body_error_message(body: &serde_json::Value) -> Option<&str> {
    body.get("error")
        .and_then(|v| v.as_str())
        .or_else(|| body.get("message").and_then(|v| v.as_str()))
}

/// Race a request against [`REQUEST_TIMEOUT_MS`]. `None` on transport
/// failure or timeout.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    send: impl Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
) -> Option<gloo_net::http::Response> {
    use futures::future::{Either, select};

    let send = std::pin::pin!(send);
    let timeout = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    match select(send, timeout).await {
        Either::Left((result, _)) => result.ok(),
        Either::Right(((), _)) => {
            log::warn!("request timed out after {REQUEST_TIMEOUT_MS}ms");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn authed_get(path: &str, token: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::get(path).header("Authorization", &format!("Bearer {token}"))
}

/// Run an authenticated POST whose success body is `{message}`.
#[cfg(target_arch = "wasm32")]
async fn message_result(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
    failure: &str,
) -> Result<String, String> {
    let Ok(request) = request else {
        return Err(failure.to_owned());
    };
    let Some(resp) = send_with_timeout(request.send()).await else {
        return Err(UNREACHABLE_MSG.to_owned());
    };
    let Ok(value) = resp.json::<serde_json::Value>().await else {
        return Err(UNREADABLE_MSG.to_owned());
    };
    if resp.ok() {
        if let Some(message) = value.get("message").and_then(|v| v.as_str()) {
            return Ok(message.to_owned());
        }
    }
    Err(body_error_message(&value).unwrap_or(failure).to_owned())
}

/// Fetch the signed-in profile with `token` from `GET /api/profile`.
///
/// A 401 means the backend explicitly rejected the token. Everything else
/// (transport errors, timeouts, non-OK statuses, error-shaped or unreadable
/// bodies) is a transient failure.
pub async fn fetch_profile(token: &str) -> ResolveOutcome {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(resp) = send_with_timeout(authed_get("/api/profile", token).send()).await else {
            return ResolveOutcome::Failed;
        };
        if resp.status() == 401 {
            return ResolveOutcome::Unauthorized;
        }
        if !resp.ok() {
            return ResolveOutcome::Failed;
        }
        let Ok(body) = resp.json::<serde_json::Value>().await else {
            return ResolveOutcome::Failed;
        };
        if body_error_message(&body).is_some() {
            return ResolveOutcome::Failed;
        }
        match serde_json::from_value::<User>(body) {
            Ok(user) => ResolveOutcome::Profile(user),
            Err(_) => ResolveOutcome::Failed,
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
        ResolveOutcome::Failed
    }
}

/// Authenticate with email and password via `POST /api/login`.
///
/// # Errors
///
/// Returns the backend's message (bad credentials and the like) or a
/// transport description. Failures never touch session state; the caller
/// only installs the session on `Ok`.
pub async fn login(email: &str, password: &str) -> Result<AuthSuccess, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let Ok(request) = gloo_net::http::Request::post("/api/login").json(&body) else {
            return Err(UNREADABLE_MSG.to_owned());
        };
        let Some(resp) = send_with_timeout(request.send()).await else {
            return Err(UNREACHABLE_MSG.to_owned());
        };
        let Ok(value) = resp.json::<serde_json::Value>().await else {
            return Err(UNREADABLE_MSG.to_owned());
        };
        if !resp.ok() || value.get("access_token").is_none() {
            return Err(body_error_message(&value).unwrap_or("sign-in failed").to_owned());
        }
        serde_json::from_value::<AuthSuccess>(value).map_err(|_| UNREADABLE_MSG.to_owned())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (email, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Create an account via `POST /api/register`.
///
/// # Errors
///
/// Returns the backend's message (duplicate address and the like). On `Ok`
/// the caller still signs in separately; registration never creates a
/// session by itself.
pub async fn register(req: &RegisterRequest) -> Result<String, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let request = gloo_net::http::Request::post("/api/register").json(req);
        message_result(request, "registration failed").await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = req;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the full school list from `GET /api/schools`.
/// Returns `None` on any failure; the list view degrades to empty.
pub async fn fetch_schools(token: &str) -> Option<Vec<School>> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = send_with_timeout(authed_get("/api/schools", token).send()).await?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<School>>().await.ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
        None
    }
}

/// Search schools on the backend via `GET /api/schools/search?q=`.
pub async fn search_schools(token: &str, query: &str) -> Option<Vec<School>> {
    #[cfg(target_arch = "wasm32")]
    {
        let request = authed_get("/api/schools/search", token).query([("q", query)]);
        let resp = send_with_timeout(request.send()).await?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<School>>().await.ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (token, query);
        None
    }
}

/// Fetch the sales team roster from `GET /api/team`.
pub async fn fetch_team(token: &str) -> Option<Vec<User>> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = send_with_timeout(authed_get("/api/team", token).send()).await?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<User>>().await.ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
        None
    }
}

/// Send an outreach email via `POST /api/emails/send`.
///
/// # Errors
///
/// Returns the backend's message, e.g. a missing sending credential.
pub async fn send_email(token: &str, req: &SendEmailRequest) -> Result<String, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let request = gloo_net::http::Request::post("/api/emails/send")
            .header("Authorization", &format!("Bearer {token}"))
            .json(req);
        message_result(request, "the email could not be sent").await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (token, req);
        Err("not available outside the browser".to_owned())
    }
}

/// Save the mail-sending credential via `POST /api/email-credential`.
///
/// # Errors
///
/// Returns the backend's message when the credential is rejected.
pub async fn save_email_credential(token: &str, password: &str) -> Result<String, String> {
    #[cfg(target_arch = "wasm32")]
    {
        #[derive(serde::Serialize)]
        struct CredentialRequest<'a> {
            password: &'a str,
        }

        let request = gloo_net::http::Request::post("/api/email-credential")
            .header("Authorization", &format!("Bearer {token}"))
            .json(&CredentialRequest { password });
        message_result(request, "the credential could not be saved").await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (token, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Forward selected stops to the backend route planner via
/// `POST /api/route-plan`. The optimization itself is entirely backend-side;
/// the response is just a visiting order over the submitted ids.
///
/// # Errors
///
/// Returns the backend's message or a transport description.
pub async fn plan_route(token: &str, stops: &[RouteStop]) -> Result<RoutePlan, String> {
    #[cfg(target_arch = "wasm32")]
    {
        #[derive(serde::Serialize)]
        struct PlanRequest<'a> {
            stops: &'a [RouteStop],
        }

        let Ok(request) = gloo_net::http::Request::post("/api/route-plan")
            .header("Authorization", &format!("Bearer {token}"))
            .json(&PlanRequest { stops })
        else {
            return Err(UNREADABLE_MSG.to_owned());
        };
        let Some(resp) = send_with_timeout(request.send()).await else {
            return Err(UNREACHABLE_MSG.to_owned());
        };
        let Ok(value) = resp.json::<serde_json::Value>().await else {
            return Err(UNREADABLE_MSG.to_owned());
        };
        if !resp.ok() {
            return Err(body_error_message(&value)
                .unwrap_or("the route could not be planned")
                .to_owned());
        }
        serde_json::from_value::<RoutePlan>(value).map_err(|_| UNREADABLE_MSG.to_owned())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (token, stops);
        Err("not available outside the browser".to_owned())
    }
}
