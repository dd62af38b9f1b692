use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::ScoreRecord;

#[derive(sqlx::FromRow)]
struct ScoreRow {
    id: Uuid,
    project_id: Uuid,
    appointment_id: Uuid,
    judge_id: Uuid,
    raw_score: Option<Decimal>,
    scaled_score: Option<Decimal>,
}

impl From<ScoreRow> for ScoreRecord {
    fn from(row: ScoreRow) -> Self {
        ScoreRecord {
            id: row.id,
            project_id: row.project_id,
            appointment_id: row.appointment_id,
            judge_id: row.judge_id,
            raw_score: row.raw_score,
            scaled_score: row.scaled_score,
        }
    }
}

/// Fetch all score records grouped by project.
pub async fn fetch_by_project(
    pool: &PgPool,
) -> Result<HashMap<Uuid, Vec<ScoreRecord>>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ScoreRow>(
        r#"
        SELECT id, project_id, appointment_id, judge_id, raw_score, scaled_score
        FROM score_records
        ORDER BY project_id, created_at
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<Uuid, Vec<ScoreRecord>> = HashMap::new();
    for row in rows {
        grouped
            .entry(row.project_id)
            .or_default()
            .push(ScoreRecord::from(row));
    }

    Ok(grouped)
}

/// Fetch the score records for one project.
pub async fn fetch_for_project(
    pool: &PgPool,
    project_id: Uuid,
) -> Result<Vec<ScoreRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ScoreRow>(
        r#"
        SELECT id, project_id, appointment_id, judge_id, raw_score, scaled_score
        FROM score_records
        WHERE project_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(project_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(ScoreRecord::from).collect())
}
