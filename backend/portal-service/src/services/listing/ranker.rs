/// Final ordering and rank assignment.
///
/// Manually-ranked rows are pinned ahead of the auto-sorted remainder
/// regardless of sort direction, the result is capped to the configured
/// limit, and 1-based ranks are assigned over the final sequence. All
/// sorts are stable so that equal keys preserve catalog order.
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::{DisplayRow, SortField};

/// Sort key for auto-sorted rows. Exactly one variant is in play per
/// listing since the sort field is fixed by the configuration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Title(String),
    Created(DateTime<Utc>),
    Score(Decimal),
}

/// A project with no score records sorts below any real score.
const MISSING_SCORE: Decimal = Decimal::NEGATIVE_ONE;

fn sort_key(row: &DisplayRow, field: SortField) -> SortKey {
    match field {
        SortField::Alphabetical => SortKey::Title(row.project.title.to_lowercase()),
        SortField::Created => SortKey::Created(row.project.created_at),
        SortField::ScoreRaw => SortKey::Score(
            row.score_summary
                .as_ref()
                .and_then(|s| s.raw.as_ref())
                .map(|axis| axis.avg)
                .unwrap_or(MISSING_SCORE),
        ),
        SortField::ScoreScaled => SortKey::Score(
            row.score_summary
                .as_ref()
                .and_then(|s| s.scaled.as_ref())
                .map(|axis| axis.avg)
                .unwrap_or(MISSING_SCORE),
        ),
    }
}

fn manual_rank(row: &DisplayRow) -> Option<i32> {
    row.entry.as_ref().and_then(|entry| entry.manual_rank)
}

/// Order the included rows, apply the result cap, and assign ranks 1..N.
pub fn rank(
    rows: Vec<DisplayRow>,
    sort_field: SortField,
    sort_descending: bool,
    limit: Option<u32>,
) -> Vec<DisplayRow> {
    let (mut manual, mut auto): (Vec<DisplayRow>, Vec<DisplayRow>) =
        rows.into_iter().partition(|row| manual_rank(row).is_some());

    // Stable: ties on manual_rank keep catalog order.
    manual.sort_by_key(|row| manual_rank(row).unwrap_or(i32::MAX));

    auto.sort_by(|a, b| {
        let ordering = sort_key(a, sort_field).cmp(&sort_key(b, sort_field));
        if sort_descending {
            ordering.reverse()
        } else {
            ordering
        }
    });

    let mut ordered = manual;
    ordered.append(&mut auto);

    if let Some(limit) = limit {
        ordered.truncate(limit as usize);
    }

    for (index, row) in ordered.iter_mut().enumerate() {
        row.rank = index + 1;
    }

    ordered
}
