/// HTTP request handlers.
///
/// Authentication and session handling live in the upstream gateway, which
/// forwards the effective viewer role in the `x-portal-role` header. The
/// handlers only enforce role-based access to what they serve.
use actix_web::HttpRequest;

use crate::error::{AppError, Result};
use crate::models::Role;

pub mod lists;
pub mod projects;

pub use lists::get_lists;
pub use projects::{get_project_detail, get_project_listing};

pub(crate) const ROLE_HEADER: &str = "x-portal-role";

/// Effective viewer role as asserted by the gateway.
pub(crate) fn viewer_role(req: &HttpRequest) -> Result<Role> {
    let value = req
        .headers()
        .get(ROLE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing viewer role".to_string()))?;

    Role::parse(value.trim())
        .ok_or_else(|| AppError::Unauthorized(format!("unknown viewer role '{value}'")))
}
