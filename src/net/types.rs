//! Request and response types for the backend's JSON API.

use serde::{Deserialize, Serialize};

/// Backend-owned profile of a signed-in user or team member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub admin: bool,
}

/// Successful `POST /api/login` body.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthSuccess {
    pub access_token: String,
    pub user: User,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

/// A school as returned by the schools endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub postcode: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct SendEmailRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// One selected point forwarded to the backend route planner.
#[derive(Clone, Debug, Serialize)]
pub struct RouteStop {
    pub id: i64,
    pub lat: f64,
    pub lng: f64,
}

/// Visiting order returned by the route planner, as school ids.
#[derive(Clone, Debug, Deserialize)]
pub struct RoutePlan {
    pub order: Vec<i64>,
}
