/// Whitelist/blacklist override resolution.
///
/// Inclusion is decided by an ordered chain of rules; the first rule whose
/// condition holds wins. The order is load-bearing: blacklist beats
/// everything, whitelist-only mode ignores structural filters, a plain
/// whitelist bypasses them, and only then does the structural match apply.
use crate::models::{ProjectList, ProjectListEntry};

/// Which rule in the chain decided inclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InclusionRule {
    Blacklist,
    NoListSelected,
    WhitelistOnly,
    Whitelist,
    Filter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InclusionDecision {
    pub include: bool,
    pub rule: InclusionRule,
}

/// Decide whether a project is included, given its optional list entry and
/// the selected configuration. `matches_filter` is the structural match,
/// evaluated lazily since the earlier rules do not need it.
pub fn decide(
    entry: Option<&ProjectListEntry>,
    selected: Option<&ProjectList>,
    matches_filter: impl FnOnce() -> bool,
) -> InclusionDecision {
    // Blacklist wins unconditionally, even if the entry also carries a
    // whitelist flag in violation of the store invariant.
    if entry.is_some_and(|e| e.is_blacklisted) {
        return InclusionDecision {
            include: false,
            rule: InclusionRule::Blacklist,
        };
    }

    let Some(list) = selected else {
        return InclusionDecision {
            include: true,
            rule: InclusionRule::NoListSelected,
        };
    };

    let whitelisted = entry.is_some_and(|e| e.is_whitelisted);

    if list.filter_config.whitelist_only {
        return InclusionDecision {
            include: whitelisted,
            rule: InclusionRule::WhitelistOnly,
        };
    }

    if whitelisted {
        return InclusionDecision {
            include: true,
            rule: InclusionRule::Whitelist,
        };
    }

    InclusionDecision {
        include: matches_filter(),
        rule: InclusionRule::Filter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FilterConfig, SortField};
    use uuid::Uuid;

    fn list(whitelist_only: bool) -> ProjectList {
        ProjectList {
            id: Uuid::new_v4(),
            slug: "finalists".into(),
            title: "Finalists".into(),
            audience: "all".into(),
            sort_field: SortField::Alphabetical,
            sort_descending: false,
            limit: None,
            filter_config: FilterConfig {
                whitelist_only,
                ..Default::default()
            },
            is_default: false,
        }
    }

    fn entry(whitelisted: bool, blacklisted: bool) -> ProjectListEntry {
        ProjectListEntry {
            id: Uuid::new_v4(),
            list_id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            is_whitelisted: whitelisted,
            is_blacklisted: blacklisted,
            manual_rank: None,
        }
    }

    #[test]
    fn blacklist_wins_over_everything() {
        let plain = list(false);
        let e = entry(false, true);
        let decision = decide(Some(&e), Some(&plain), || true);
        assert!(!decision.include);
        assert_eq!(decision.rule, InclusionRule::Blacklist);

        // Even with the mutual-exclusion invariant violated.
        let e = entry(true, true);
        assert!(!decide(Some(&e), Some(&plain), || true).include);

        // And even in whitelist-only mode.
        let wl_only = list(true);
        let e = entry(true, true);
        assert!(!decide(Some(&e), Some(&wl_only), || true).include);
    }

    #[test]
    fn no_selected_list_includes_everything() {
        let decision = decide(None, None, || false);
        assert!(decision.include);
        assert_eq!(decision.rule, InclusionRule::NoListSelected);

        let e = entry(false, false);
        assert!(decide(Some(&e), None, || false).include);
    }

    #[test]
    fn whitelist_only_ignores_structural_match() {
        let list = list(true);

        // Structurally matching project without a whitelist entry: excluded.
        let decision = decide(None, Some(&list), || true);
        assert!(!decision.include);
        assert_eq!(decision.rule, InclusionRule::WhitelistOnly);

        // Whitelisted entry: included regardless of the filter.
        let e = entry(true, false);
        assert!(decide(Some(&e), Some(&list), || false).include);
    }

    #[test]
    fn whitelist_bypasses_structural_filter() {
        let list = list(false);
        let e = entry(true, false);
        let decision = decide(Some(&e), Some(&list), || false);
        assert!(decision.include);
        assert_eq!(decision.rule, InclusionRule::Whitelist);
    }

    #[test]
    fn structural_match_is_the_last_resort() {
        let list = list(false);
        assert!(decide(None, Some(&list), || true).include);
        assert!(!decide(None, Some(&list), || false).include);

        let e = entry(false, false);
        let decision = decide(Some(&e), Some(&list), || false);
        assert!(!decision.include);
        assert_eq!(decision.rule, InclusionRule::Filter);
    }
}
