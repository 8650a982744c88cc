/// The name of the schema holding NVD-derived vulnerability tables.
pub const CVE_SCHEMA: &str = "cve";

/// The name of the schema holding CWE reference tables.
pub const CWE_SCHEMA: &str = "cwe";

/// The name of the field `ID`.
///
/// Added automatically to every main-base table.
pub const ID: &str = "id";

/// Creation timestamp column added automatically to every main-base table.
pub const DATE_CREATED: &str = "date_created";

/// Modification timestamp column added automatically to every main-base table.
///
/// Kept current by the trigger installed through
/// [`crate::model_base::ddl::CREATE_DATE_MODIFIED_FUNCTION`].
pub const DATE_MODIFIED: &str = "date_modified";

/// Name of the trigger function shared by all tables carrying a
/// `date_modified` column.
pub const DATE_MODIFIED_TRIGGER_FUNCTION: &str = "set_date_modified";
