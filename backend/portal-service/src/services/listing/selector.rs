/// List configuration selection.
///
/// An explicitly requested slug must exist among the configurations visible
/// to the viewer; a missing slug is a NotFound error, never a silent
/// fallback. Without a request, defaults are preferred (audience-exact
/// first), then the first available configuration, then none.
use crate::error::{AppError, Result};
use crate::models::{ProjectList, Role};

pub fn select_list<'a>(
    available: &'a [ProjectList],
    requested_slug: Option<&str>,
    viewer: Role,
) -> Result<Option<&'a ProjectList>> {
    if let Some(slug) = requested_slug.filter(|s| !s.is_empty()) {
        return match available.iter().find(|list| list.slug == slug) {
            Some(list) => Ok(Some(list)),
            None => Err(AppError::NotFound(format!("project list '{slug}'"))),
        };
    }

    let defaults: Vec<&ProjectList> = available.iter().filter(|list| list.is_default).collect();

    if let Some(list) = defaults
        .iter()
        .copied()
        .find(|list| list.audience == viewer.as_str())
    {
        return Ok(Some(list));
    }

    if let Some(list) = defaults.first().copied() {
        return Ok(Some(list));
    }

    Ok(available.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FilterConfig, SortField};
    use uuid::Uuid;

    fn list(slug: &str, audience: &str, is_default: bool) -> ProjectList {
        ProjectList {
            id: Uuid::new_v4(),
            slug: slug.into(),
            title: slug.into(),
            audience: audience.into(),
            sort_field: SortField::Alphabetical,
            sort_descending: false,
            limit: None,
            filter_config: FilterConfig::default(),
            is_default,
        }
    }

    #[test]
    fn explicit_slug_is_honored() {
        let lists = vec![list("general", "all", false), list("finalists", "all", false)];
        let selected = select_list(&lists, Some("finalists"), Role::Admin).unwrap();
        assert_eq!(selected.unwrap().slug, "finalists");
    }

    #[test]
    fn unknown_slug_is_not_found_not_a_fallback() {
        let lists = vec![list("general", "all", false)];
        let err = select_list(&lists, Some("missing"), Role::Admin).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn empty_slug_behaves_like_no_request() {
        let lists = vec![list("general", "all", false)];
        let selected = select_list(&lists, Some(""), Role::Admin).unwrap();
        assert_eq!(selected.unwrap().slug, "general");
    }

    #[test]
    fn audience_matching_default_is_preferred() {
        let lists = vec![
            list("general", "all", true),
            list("admin-picks", "admin", true),
        ];
        let selected = select_list(&lists, None, Role::Admin).unwrap();
        assert_eq!(selected.unwrap().slug, "admin-picks");
    }

    #[test]
    fn first_default_wins_when_no_audience_match() {
        let lists = vec![
            list("general", "all", true),
            list("judge-picks", "judge", true),
        ];
        let selected = select_list(&lists, None, Role::Admin).unwrap();
        assert_eq!(selected.unwrap().slug, "general");
    }

    #[test]
    fn first_available_when_no_defaults() {
        let lists = vec![list("alpha", "all", false), list("beta", "all", false)];
        let selected = select_list(&lists, None, Role::Judge).unwrap();
        assert_eq!(selected.unwrap().slug, "alpha");
    }

    #[test]
    fn none_when_nothing_available() {
        let selected = select_list(&[], None, Role::Judge).unwrap();
        assert!(selected.is_none());
    }
}
