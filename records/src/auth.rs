//! Authentication wire types shared by the login page and `/api/auth` routes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated user identity as returned by `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    /// `"admin"` or `"staff"`.
    pub role: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
