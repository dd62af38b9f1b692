/// Data models for portal-service
///
/// The hackathon domain: projects submitted by teams, per-judge score
/// records, and administrator-curated project lists that control which
/// projects are shown to which viewers and in what order.
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Viewer roles, assigned upstream by the auth gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Hacktj,
    Judge,
    Team,
    Volunteer,
}

impl Role {
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "hacktj" => Some(Role::Hacktj),
            "judge" => Some(Role::Judge),
            "team" => Some(Role::Team),
            "volunteer" => Some(Role::Volunteer),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Hacktj => "hacktj",
            Role::Judge => "judge",
            Role::Team => "team",
            Role::Volunteer => "volunteer",
        }
    }

    /// Master project list is organizer/judge facing.
    pub fn can_view_project_list(self) -> bool {
        matches!(self, Role::Admin | Role::Judge | Role::Hacktj)
    }

    /// Raw and scaled scores are visible to admins and judges only.
    pub fn can_view_scores(self) -> bool {
        matches!(self, Role::Admin | Role::Judge)
    }
}

/// Main judging category of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainCategory {
    Biomedical,
    Sustainability,
    Finance,
    Lifestyle,
    Cyber,
    Quantum,
    Other,
}

impl MainCategory {
    pub fn from_code(code: &str) -> Option<MainCategory> {
        match code {
            "biomedical" => Some(MainCategory::Biomedical),
            "sustainability" => Some(MainCategory::Sustainability),
            "finance" => Some(MainCategory::Finance),
            "lifestyle" => Some(MainCategory::Lifestyle),
            "cyber" => Some(MainCategory::Cyber),
            "quantum" => Some(MainCategory::Quantum),
            "other" => Some(MainCategory::Other),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            MainCategory::Biomedical => "biomedical",
            MainCategory::Sustainability => "sustainability",
            MainCategory::Finance => "finance",
            MainCategory::Lifestyle => "lifestyle",
            MainCategory::Cyber => "cyber",
            MainCategory::Quantum => "quantum",
            MainCategory::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MainCategory::Biomedical => "Biomedical Science",
            MainCategory::Sustainability => "Sustainability",
            MainCategory::Finance => "Finance",
            MainCategory::Lifestyle => "Lifestyle",
            MainCategory::Cyber => "Cyber Technology",
            MainCategory::Quantum => "Quantum",
            MainCategory::Other => "Other",
        }
    }
}

/// Boolean attributes a project can carry. Filter configs refer to these by
/// name; several legacy spellings map to the same attribute (see
/// `ProjectFlag::resolve`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFlag {
    Beginner,
    Mobile,
    Web,
    AiMl,
    Roam,
}

impl ProjectFlag {
    /// Static alias table mapping filter-config flag names to attributes.
    /// Unknown names resolve to `None` and are treated as always-false.
    pub fn resolve(name: &str) -> Option<ProjectFlag> {
        match name {
            "beginner" | "is_beginner" => Some(ProjectFlag::Beginner),
            "mobile" | "is_mobile" => Some(ProjectFlag::Mobile),
            "web" | "is_web" => Some(ProjectFlag::Web),
            "ai_ml" | "uses_ai_ml" => Some(ProjectFlag::AiMl),
            "roam" | "is_roam" => Some(ProjectFlag::Roam),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectFlag::Beginner => "Beginner",
            ProjectFlag::Mobile => "Mobile",
            ProjectFlag::Web => "Web",
            ProjectFlag::AiMl => "AI/ML",
            ProjectFlag::Roam => "Roam",
        }
    }
}

const ALL_FLAGS: [ProjectFlag; 5] = [
    ProjectFlag::Beginner,
    ProjectFlag::Mobile,
    ProjectFlag::Web,
    ProjectFlag::AiMl,
    ProjectFlag::Roam,
];

/// A submitted hackathon project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub team_name: String,
    pub title: String,
    pub main_category: MainCategory,
    /// Additional category tags the project qualifies for
    /// (e.g. "social_impact", "coder").
    pub eligible_categories: Vec<String>,
    pub is_beginner: bool,
    pub is_mobile: bool,
    pub is_web: bool,
    pub uses_ai_ml: bool,
    pub is_roam: bool,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn flag(&self, flag: ProjectFlag) -> bool {
        match flag {
            ProjectFlag::Beginner => self.is_beginner,
            ProjectFlag::Mobile => self.is_mobile,
            ProjectFlag::Web => self.is_web,
            ProjectFlag::AiMl => self.uses_ai_ml,
            ProjectFlag::Roam => self.is_roam,
        }
    }

    /// Human-readable labels for the flags that are set, in display order.
    pub fn attribute_labels(&self) -> Vec<String> {
        ALL_FLAGS
            .into_iter()
            .filter(|flag| self.flag(*flag))
            .map(|flag| flag.label().to_string())
            .collect()
    }
}

/// A single judge's score for a project at one judging appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: Uuid,
    pub project_id: Uuid,
    pub appointment_id: Uuid,
    pub judge_id: Uuid,
    pub raw_score: Option<Decimal>,
    pub scaled_score: Option<Decimal>,
}

/// Sort key selection for a project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Alphabetical,
    Created,
    ScoreRaw,
    ScoreScaled,
}

impl SortField {
    /// Unrecognized codes fall back to alphabetical rather than erroring.
    pub fn from_code(code: &str) -> SortField {
        match code {
            "created" => SortField::Created,
            "score_raw" => SortField::ScoreRaw,
            "score_scaled" => SortField::ScoreScaled,
            _ => SortField::Alphabetical,
        }
    }

    pub fn is_score_based(self) -> bool {
        matches!(self, SortField::ScoreRaw | SortField::ScoreScaled)
    }
}

/// Structured filter predicate stored on a project list.
///
/// Every field is optional in the stored form; an absent or empty field
/// imposes no constraint. Matching semantics live in
/// `services::listing::filter`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    #[serde(alias = "categories")]
    pub main_categories: Vec<String>,
    pub eligible_categories: Vec<String>,
    pub require_flags: Vec<String>,
    pub exclude_flags: Vec<String>,
    pub whitelist_only: bool,
}

impl FilterConfig {
    /// Lenient decode of the stored jsonb value. Malformed or missing keys
    /// impose no constraint, never an error.
    pub fn from_value(value: &serde_json::Value) -> FilterConfig {
        let string_list = |key: &str| -> Vec<String> {
            value
                .get(key)
                .and_then(|v| v.as_array())
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|item| item.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default()
        };

        let mut main_categories = string_list("main_categories");
        if main_categories.is_empty() {
            // Legacy configs used "categories" for the same key.
            main_categories = string_list("categories");
        }

        FilterConfig {
            main_categories,
            eligible_categories: string_list("eligible_categories"),
            require_flags: string_list("require_flags"),
            exclude_flags: string_list("exclude_flags"),
            whitelist_only: value
                .get("whitelist_only")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.main_categories.is_empty()
            && self.eligible_categories.is_empty()
            && self.require_flags.is_empty()
            && self.exclude_flags.is_empty()
            && !self.whitelist_only
    }
}

/// An administrator-curated, named project list configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectList {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    /// Role tag or "all".
    pub audience: String,
    pub sort_field: SortField,
    pub sort_descending: bool,
    pub limit: Option<u32>,
    pub filter_config: FilterConfig,
    pub is_default: bool,
}

/// Per-project override attached to one project list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectListEntry {
    pub id: Uuid,
    pub list_id: Uuid,
    pub project_id: Uuid,
    pub is_whitelisted: bool,
    pub is_blacklisted: bool,
    pub manual_rank: Option<i32>,
}

/// Per-axis score statistics, computed over that axis's non-null values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisStats {
    pub count: usize,
    pub avg: Decimal,
    pub min: Decimal,
    pub max: Decimal,
}

/// Summary of a project's score records. Absent entirely when the project
/// has no records; an axis with no values has no stats. The two axes can
/// have different counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub count: usize,
    pub raw: Option<AxisStats>,
    pub scaled: Option<AxisStats>,
}

/// One row of the computed listing. `rank` is 1-based and assigned only
/// after final ordering.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayRow {
    pub project: Project,
    pub entry: Option<ProjectListEntry>,
    pub score_summary: Option<ScoreSummary>,
    pub attributes: Vec<String>,
    pub rank: usize,
}

/// The computed listing for one viewer and one resolved configuration.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub rows: Vec<DisplayRow>,
    pub selected_list: Option<ProjectList>,
    pub total_projects: usize,
    pub display_count: usize,
    pub active_filters: Vec<String>,
    pub show_scores: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flag_aliases_resolve_to_the_same_attribute() {
        assert_eq!(
            ProjectFlag::resolve("beginner"),
            ProjectFlag::resolve("is_beginner")
        );
        assert_eq!(
            ProjectFlag::resolve("ai_ml"),
            ProjectFlag::resolve("uses_ai_ml")
        );
        assert_eq!(ProjectFlag::resolve("nonsense"), None);
    }

    #[test]
    fn sort_field_unknown_code_falls_back_to_alphabetical() {
        assert_eq!(SortField::from_code("score_raw"), SortField::ScoreRaw);
        assert_eq!(SortField::from_code("???"), SortField::Alphabetical);
    }

    #[test]
    fn filter_config_decodes_leniently() {
        let value = json!({
            "main_categories": ["cyber", 42],
            "require_flags": "not-a-list",
            "whitelist_only": true,
        });
        let config = FilterConfig::from_value(&value);
        assert_eq!(config.main_categories, vec!["cyber".to_string()]);
        assert!(config.require_flags.is_empty());
        assert!(config.whitelist_only);
    }

    #[test]
    fn filter_config_accepts_legacy_categories_key() {
        let value = json!({ "categories": ["finance"] });
        let config = FilterConfig::from_value(&value);
        assert_eq!(config.main_categories, vec!["finance".to_string()]);
    }

    #[test]
    fn attribute_labels_follow_display_order() {
        let project = Project {
            id: Uuid::new_v4(),
            team_name: "Eco Warriors".into(),
            title: "Eco Scanner".into(),
            main_category: MainCategory::Sustainability,
            eligible_categories: vec![],
            is_beginner: true,
            is_mobile: false,
            is_web: true,
            uses_ai_ml: true,
            is_roam: false,
            created_at: Utc::now(),
        };
        assert_eq!(project.attribute_labels(), vec!["Beginner", "Web", "AI/ML"]);
    }
}
