use actix_web::{web, HttpRequest, HttpResponse};
use sqlx::PgPool;

use crate::db::list_repo;
use crate::error::{AppError, Result};

use super::projects::ListMeta;
use super::viewer_role;

/// GET /api/v1/lists
///
/// The list configurations visible to the viewer, for the list picker.
pub async fn get_lists(http_req: HttpRequest, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let role = viewer_role(&http_req)?;
    if !role.can_view_project_list() {
        return Err(AppError::Forbidden(
            "no access to project lists".to_string(),
        ));
    }

    let available = list_repo::fetch_for_audience(&pool, role).await?;
    let lists: Vec<ListMeta> = available.iter().map(ListMeta::from).collect();

    Ok(HttpResponse::Ok().json(lists))
}
