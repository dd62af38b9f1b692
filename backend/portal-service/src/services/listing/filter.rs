/// Structural filter evaluation for project lists.
///
/// A filter config is a conjunction of optional constraints; an absent or
/// empty key imposes nothing. Evaluation short-circuits on the first
/// failing key, and no key has side effects, so the result is independent
/// of evaluation order.
use crate::models::{FilterConfig, MainCategory, Project, ProjectFlag};

impl FilterConfig {
    /// Structural match: does the project satisfy every present constraint?
    pub fn matches(&self, project: &Project) -> bool {
        if !self.main_categories.is_empty()
            && !self
                .main_categories
                .iter()
                .any(|code| code == project.main_category.code())
        {
            return false;
        }

        // Eligible-category tags are OR'd: one shared tag is enough.
        if !self.eligible_categories.is_empty()
            && !self
                .eligible_categories
                .iter()
                .any(|tag| project.eligible_categories.contains(tag))
        {
            return false;
        }

        // Unknown flag names resolve to an always-false attribute.
        for name in &self.require_flags {
            let set = ProjectFlag::resolve(name).is_some_and(|flag| project.flag(flag));
            if !set {
                return false;
            }
        }

        for name in &self.exclude_flags {
            let set = ProjectFlag::resolve(name).is_some_and(|flag| project.flag(flag));
            if set {
                return false;
            }
        }

        true
    }

    /// One human-readable string per active filter key, for display above
    /// the listing.
    pub fn describe(&self) -> Vec<String> {
        let mut descriptions = Vec::new();

        if !self.main_categories.is_empty() {
            let labels: Vec<String> = self
                .main_categories
                .iter()
                .map(|code| match MainCategory::from_code(code) {
                    Some(category) => category.label().to_string(),
                    None => title_case(code),
                })
                .collect();
            descriptions.push(format!("Main categories: {}", labels.join(", ")));
        }

        if !self.eligible_categories.is_empty() {
            let labels: Vec<String> = self.eligible_categories.iter().map(|t| title_case(t)).collect();
            descriptions.push(format!("Eligible for: {}", labels.join(", ")));
        }

        if !self.require_flags.is_empty() {
            let labels: Vec<String> = self.require_flags.iter().map(|f| title_case(f)).collect();
            descriptions.push(format!("Must have: {}", labels.join(", ")));
        }

        if !self.exclude_flags.is_empty() {
            let labels: Vec<String> = self.exclude_flags.iter().map(|f| title_case(f)).collect();
            descriptions.push(format!("Exclude: {}", labels.join(", ")));
        }

        if self.whitelist_only {
            descriptions.push("Whitelist entries only".to_string());
        }

        descriptions
    }
}

/// "social_impact" -> "Social Impact"
fn title_case(code: &str) -> String {
    code.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
