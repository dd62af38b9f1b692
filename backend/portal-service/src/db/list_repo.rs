use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{FilterConfig, ProjectList, ProjectListEntry, Role, SortField};

#[derive(sqlx::FromRow)]
struct ProjectListRow {
    id: Uuid,
    slug: String,
    title: String,
    audience: String,
    sort_field: String,
    sort_descending: bool,
    limit_rows: Option<i32>,
    filter_config: serde_json::Value,
    is_default: bool,
}

impl From<ProjectListRow> for ProjectList {
    fn from(row: ProjectListRow) -> Self {
        ProjectList {
            id: row.id,
            slug: row.slug,
            title: row.title,
            audience: row.audience,
            sort_field: SortField::from_code(&row.sort_field),
            sort_descending: row.sort_descending,
            limit: row.limit_rows.and_then(|n| u32::try_from(n).ok()),
            filter_config: FilterConfig::from_value(&row.filter_config),
            is_default: row.is_default,
        }
    }
}

/// Fetch the list configurations visible to a viewer role, in stable title
/// order. Audience "all" configurations are visible to everyone.
pub async fn fetch_for_audience(
    pool: &PgPool,
    viewer: Role,
) -> Result<Vec<ProjectList>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProjectListRow>(
        r#"
        SELECT id, slug, title, audience, sort_field, sort_descending,
               limit_rows, filter_config, is_default
        FROM project_lists
        WHERE audience = 'all' OR audience = $1
        ORDER BY title, id
        "#,
    )
    .bind(viewer.as_str())
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(ProjectList::from).collect())
}

#[derive(sqlx::FromRow)]
struct EntryRow {
    id: Uuid,
    list_id: Uuid,
    project_id: Uuid,
    is_whitelisted: bool,
    is_blacklisted: bool,
    manual_rank: Option<i32>,
}

/// Fetch the override entries for one list.
pub async fn fetch_entries(
    pool: &PgPool,
    list_id: Uuid,
) -> Result<Vec<ProjectListEntry>, sqlx::Error> {
    let rows = sqlx::query_as::<_, EntryRow>(
        r#"
        SELECT id, list_id, project_id, is_whitelisted, is_blacklisted, manual_rank
        FROM project_list_entries
        WHERE list_id = $1
        "#,
    )
    .bind(list_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| ProjectListEntry {
            id: row.id,
            list_id: row.list_id,
            project_id: row.project_id,
            is_whitelisted: row.is_whitelisted,
            is_blacklisted: row.is_blacklisted,
            manual_rank: row.manual_rank,
        })
        .collect())
}
