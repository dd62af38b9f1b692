use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{MainCategory, Project};

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    team_name: String,
    title: String,
    main_category: String,
    eligible_categories: serde_json::Value,
    is_beginner: bool,
    is_mobile: bool,
    is_web: bool,
    uses_ai_ml: bool,
    is_roam: bool,
    created_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            team_name: row.team_name,
            title: row.title,
            // Unknown category codes are treated as "other" rather than
            // failing the whole catalog fetch.
            main_category: MainCategory::from_code(&row.main_category)
                .unwrap_or(MainCategory::Other),
            eligible_categories: row
                .eligible_categories
                .as_array()
                .map(|tags| {
                    tags.iter()
                        .filter_map(|tag| tag.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default(),
            is_beginner: row.is_beginner,
            is_mobile: row.is_mobile,
            is_web: row.is_web,
            uses_ai_ml: row.uses_ai_ml,
            is_roam: row.is_roam,
            created_at: row.created_at,
        }
    }
}

/// Fetch the full project catalog in stable (insertion) order. The listing
/// engine relies on this order for tie-breaking.
pub async fn fetch_catalog(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProjectRow>(
        r#"
        SELECT p.id, t.team_name, p.title, p.main_category, p.eligible_categories,
               p.is_beginner, p.is_mobile, p.is_web, p.uses_ai_ml, p.is_roam,
               p.created_at
        FROM projects p
        JOIN teams t ON t.id = p.team_id
        ORDER BY p.created_at, p.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Project::from).collect())
}

/// Fetch a single project, or None if it does not exist.
pub async fn find_by_id(pool: &PgPool, project_id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    let row = sqlx::query_as::<_, ProjectRow>(
        r#"
        SELECT p.id, t.team_name, p.title, p.main_category, p.eligible_categories,
               p.is_beginner, p.is_mobile, p.is_web, p.uses_ai_ml, p.is_roam,
               p.created_at
        FROM projects p
        JOIN teams t ON t.id = p.team_id
        WHERE p.id = $1
        "#,
    )
    .bind(project_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Project::from))
}
