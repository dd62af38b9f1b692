/// Database access layer.
///
/// Repositories materialize request-scoped catalogs; all selection and
/// ordering logic lives in the listing engine, not in SQL.
pub mod list_repo;
pub mod project_repo;
pub mod score_repo;
