use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::db::{list_repo, project_repo, score_repo};
use crate::error::{AppError, Result};
use crate::models::{DisplayRow, Listing, MainCategory, Project, ProjectList, ScoreSummary};
use crate::services::listing::{self, ListingInputs};

use super::viewer_role;

#[derive(Debug, Deserialize)]
pub struct ListingQueryParams {
    /// Slug of the list configuration to apply.
    pub list: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListMeta {
    pub slug: String,
    pub title: String,
    pub is_default: bool,
}

impl From<&ProjectList> for ListMeta {
    fn from(list: &ProjectList) -> Self {
        ListMeta {
            slug: list.slug.clone(),
            title: list.title.clone(),
            is_default: list.is_default,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectRowResponse {
    pub rank: usize,
    pub id: Uuid,
    pub title: String,
    pub team_name: String,
    pub main_category: MainCategory,
    pub main_category_label: String,
    pub attributes: Vec<String>,
    pub eligible_categories: Vec<String>,
    pub is_whitelisted: bool,
    pub manual_rank: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_summary: Option<ScoreSummary>,
}

impl ProjectRowResponse {
    fn from_row(row: DisplayRow, show_scores: bool) -> Self {
        ProjectRowResponse {
            rank: row.rank,
            id: row.project.id,
            title: row.project.title,
            team_name: row.project.team_name,
            main_category: row.project.main_category,
            main_category_label: row.project.main_category.label().to_string(),
            attributes: row.attributes,
            eligible_categories: row.project.eligible_categories,
            is_whitelisted: row.entry.as_ref().map_or(false, |e| e.is_whitelisted),
            manual_rank: row.entry.as_ref().and_then(|e| e.manual_rank),
            score_summary: if show_scores { row.score_summary } else { None },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub rows: Vec<ProjectRowResponse>,
    pub selected_list: Option<ListMeta>,
    pub total_projects: usize,
    pub display_count: usize,
    pub active_filters: Vec<String>,
    pub show_scores: bool,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        let show_scores = listing.show_scores;
        ListingResponse {
            selected_list: listing.selected_list.as_ref().map(ListMeta::from),
            total_projects: listing.total_projects,
            display_count: listing.display_count,
            active_filters: listing.active_filters,
            show_scores,
            rows: listing
                .rows
                .into_iter()
                .map(|row| ProjectRowResponse::from_row(row, show_scores))
                .collect(),
        }
    }
}

/// GET /api/v1/projects
///
/// The master project listing: selects the applicable list configuration
/// for the viewer, then computes the ordered, capped, ranked rows.
pub async fn get_project_listing(
    query: web::Query<ListingQueryParams>,
    http_req: HttpRequest,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let role = viewer_role(&http_req)?;
    if !role.can_view_project_list() {
        return Err(AppError::Forbidden(
            "no access to the master project list".to_string(),
        ));
    }

    let available = list_repo::fetch_for_audience(&pool, role).await?;
    let selected = listing::select_list(&available, query.list.as_deref(), role)?;

    let entries = match selected {
        Some(list) => list_repo::fetch_entries(&pool, list.id).await?,
        None => Vec::new(),
    };

    let projects = project_repo::fetch_catalog(&pool).await?;
    let scores_by_project = score_repo::fetch_by_project(&pool).await?;

    debug!(
        viewer = role.as_str(),
        catalog = projects.len(),
        list = selected.map(|l| l.slug.as_str()).unwrap_or("-"),
        "building project listing"
    );

    let result = listing::build_listing(
        &ListingInputs {
            projects: &projects,
            scores_by_project: &scores_by_project,
            selected_list: selected,
            entries: &entries,
        },
        role,
    );

    Ok(HttpResponse::Ok().json(ListingResponse::from(result)))
}

#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub team_name: String,
    pub main_category: MainCategory,
    pub main_category_label: String,
    pub attributes: Vec<String>,
    pub eligible_categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_summary: Option<ScoreSummary>,
}

impl ProjectDetailResponse {
    fn new(project: Project, score_summary: Option<ScoreSummary>) -> Self {
        ProjectDetailResponse {
            id: project.id,
            main_category_label: project.main_category.label().to_string(),
            attributes: project.attribute_labels(),
            title: project.title,
            team_name: project.team_name,
            main_category: project.main_category,
            eligible_categories: project.eligible_categories,
            created_at: project.created_at,
            score_summary,
        }
    }
}

/// GET /api/v1/projects/{project_id}
pub async fn get_project_detail(
    path: web::Path<Uuid>,
    http_req: HttpRequest,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let role = viewer_role(&http_req)?;
    if !role.can_view_project_list() {
        return Err(AppError::Forbidden("no access to this project".to_string()));
    }

    let project_id = path.into_inner();
    let project = project_repo::find_by_id(&pool, project_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("project {project_id}")))?;

    let score_summary = if role.can_view_scores() {
        let records = score_repo::fetch_for_project(&pool, project_id).await?;
        listing::scores::summarize(&records)
    } else {
        None
    };

    Ok(HttpResponse::Ok().json(ProjectDetailResponse::new(project, score_summary)))
}
