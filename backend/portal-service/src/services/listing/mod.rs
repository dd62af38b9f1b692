/// Project listing & ranking engine.
///
/// A pure, synchronous computation over one request's already-fetched data:
/// the project catalog, per-project score records, the entries of the
/// selected list, and the viewer context. Selection and ordering are
/// recomputed per request; nothing is persisted.
///
/// Pipeline: the selected configuration's structural filter and its
/// whitelist/blacklist overrides jointly decide inclusion per project, the
/// score aggregator supplies sort keys when sorting by score, and the
/// ranker produces the final ordered, capped, ranked row sequence.
use std::collections::HashMap;

use tracing::{debug, trace};
use uuid::Uuid;

pub mod filter;
pub mod overrides;
pub mod ranker;
pub mod scores;
pub mod selector;

pub use selector::select_list;

use crate::models::{
    DisplayRow, Listing, Project, ProjectList, ProjectListEntry, Role, ScoreRecord, SortField,
};

/// Everything the engine needs for one invocation. Viewer role and score
/// visibility are carried explicitly; the engine holds no ambient state.
pub struct ListingInputs<'a> {
    pub projects: &'a [Project],
    pub scores_by_project: &'a HashMap<Uuid, Vec<ScoreRecord>>,
    pub selected_list: Option<&'a ProjectList>,
    pub entries: &'a [ProjectListEntry],
}

pub fn build_listing(inputs: &ListingInputs<'_>, viewer: Role) -> Listing {
    let show_scores = viewer.can_view_scores();
    let selected = inputs.selected_list;

    let entries_by_project: HashMap<Uuid, &ProjectListEntry> = inputs
        .entries
        .iter()
        .map(|entry| (entry.project_id, entry))
        .collect();

    let mut sort_field = selected.map_or(SortField::Alphabetical, |list| list.sort_field);
    let sort_descending = selected.is_some_and(|list| list.sort_descending);
    let limit = selected.and_then(|list| list.limit);

    // Never leak score ordering to viewers who cannot see scores.
    if !show_scores && sort_field.is_score_based() {
        debug!(viewer = viewer.as_str(), "downgrading score sort to alphabetical");
        sort_field = SortField::Alphabetical;
    }

    let mut rows = Vec::new();
    for project in inputs.projects {
        let entry = entries_by_project.get(&project.id).copied();
        let decision = overrides::decide(entry, selected, || {
            selected.map_or(true, |list| list.filter_config.matches(project))
        });

        trace!(
            project = %project.id,
            include = decision.include,
            rule = ?decision.rule,
            "inclusion decided"
        );

        if !decision.include {
            continue;
        }

        let score_summary = inputs
            .scores_by_project
            .get(&project.id)
            .and_then(|records| scores::summarize(records));

        rows.push(DisplayRow {
            attributes: project.attribute_labels(),
            project: project.clone(),
            entry: entry.cloned(),
            score_summary,
            rank: 0,
        });
    }

    let rows = ranker::rank(rows, sort_field, sort_descending, limit);

    Listing {
        total_projects: inputs.projects.len(),
        display_count: rows.len(),
        active_filters: selected.map_or_else(Vec::new, |list| list.filter_config.describe()),
        selected_list: selected.cloned(),
        show_scores,
        rows,
    }
}
