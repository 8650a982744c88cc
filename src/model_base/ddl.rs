//! DDL text generation.
//!
//! Everything here renders to plain SQL strings; execution lives in
//! [`crate::db_api::create`]. Each emitted statement is idempotent
//! (`IF NOT EXISTS` / `OR REPLACE`), re-applying a layout is a no-op.

use const_format::formatcp;

use crate::db_api::consts::{
    CVE_SCHEMA, CWE_SCHEMA, DATE_MODIFIED, DATE_MODIFIED_TRIGGER_FUNCTION,
};

use super::{index::IndexDef, table::TableDef};

pub const CREATE_CVE_SCHEMA: &str = formatcp!("CREATE SCHEMA IF NOT EXISTS \"{}\";", CVE_SCHEMA);
pub const CREATE_CWE_SCHEMA: &str = formatcp!("CREATE SCHEMA IF NOT EXISTS \"{}\";", CWE_SCHEMA);

/// Trigger function shared by every table carrying a `date_modified` column.
///
/// The per-table `BEFORE UPDATE` triggers from [`create_trigger_sql`] all call
/// into this one function.
pub const CREATE_DATE_MODIFIED_FUNCTION: &str = formatcp!(
    "CREATE OR REPLACE FUNCTION {func}() RETURNS TRIGGER AS $$
BEGIN
    NEW.\"{col}\" = CURRENT_TIMESTAMP;
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;",
    func = DATE_MODIFIED_TRIGGER_FUNCTION,
    col = DATE_MODIFIED
);

pub fn create_table_sql(table: &TableDef) -> String {
    let columns = table
        .columns
        .iter()
        .map(|column| column.sql())
        .collect::<Vec<_>>()
        .join(",\n    ");
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n);",
        table.qualified_name(),
        columns
    )
}

pub fn create_index_sql(table: &TableDef, index: &IndexDef) -> String {
    format!(
        "CREATE INDEX IF NOT EXISTS \"{}\" ON {} (\"{}\");",
        index.name,
        table.schema.qualify(&index.table),
        index.column
    )
}

/// Index for a column whose inline request survived (tables outside the
/// derivation path). Named the way PostgreSQL would name it on its own.
fn create_inline_index_sql(table: &TableDef, column_name: &str) -> String {
    format!(
        "CREATE INDEX IF NOT EXISTS \"{}_{}_idx\" ON {} (\"{}\");",
        table.name,
        column_name,
        table.qualified_name(),
        column_name
    )
}

/// `BEFORE UPDATE` trigger bumping `date_modified` on every row modification.
pub fn create_trigger_sql(table: &TableDef) -> String {
    format!(
        "CREATE OR REPLACE TRIGGER \"trg_{}_{}\"
BEFORE UPDATE ON {}
FOR EACH ROW EXECUTE FUNCTION {}();",
        table.name,
        DATE_MODIFIED,
        table.qualified_name(),
        DATE_MODIFIED_TRIGGER_FUNCTION
    )
}

/// All statements needed to materialize the given definitions, in dependency
/// order: schemas first, then the trigger function, tables, indices, and the
/// per-table triggers.
pub fn schema_statements(tables: &[TableDef]) -> Vec<String> {
    let mut statements = vec![CREATE_CVE_SCHEMA.to_owned(), CREATE_CWE_SCHEMA.to_owned()];

    if tables.iter().any(|table| table.touch_date_modified) {
        statements.push(CREATE_DATE_MODIFIED_FUNCTION.to_owned());
    }

    for table in tables {
        statements.push(create_table_sql(table));
    }
    for table in tables {
        for index in &table.indices {
            statements.push(create_index_sql(table, index));
        }
        for column in table.columns.iter().filter(|column| column.index) {
            statements.push(create_inline_index_sql(table, &column.name));
        }
    }
    for table in tables.iter().filter(|table| table.touch_date_modified) {
        statements.push(create_trigger_sql(table));
    }

    statements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model_base::{ColumnDef, ColumnType};

    fn sample_tables() -> Vec<TableDef> {
        vec![
            TableDef::main_base(
                "vulnerabilities",
                vec![ColumnDef::new("cve_id", ColumnType::VarChar(32)).not_null()],
            ),
            TableDef::nvd_base(
                "nvd_entries",
                vec![
                    ColumnDef::new("cve_id", ColumnType::VarChar(32))
                        .primary_key()
                        .indexed(),
                    ColumnDef::new("data", ColumnType::Jsonb).not_null(),
                ],
            ),
            TableDef::cwe_base(
                "cwe_entries",
                vec![ColumnDef::new("cwe_id", ColumnType::VarChar(16)).primary_key()],
            ),
        ]
    }

    #[test]
    fn table_sql_quotes_and_qualifies() {
        let tables = sample_tables();
        let nvd = create_table_sql(&tables[1]);
        assert!(nvd.starts_with("CREATE TABLE IF NOT EXISTS \"cve\".\"nvd_entries\""));
        assert!(nvd.contains("\"cve_id\" CHARACTER VARYING(32) PRIMARY KEY"));

        let main = create_table_sql(&tables[0]);
        assert!(main.starts_with("CREATE TABLE IF NOT EXISTS \"vulnerabilities\""));
        assert!(main.contains("\"id\" SERIAL PRIMARY KEY"));
        assert!(main.contains("\"date_modified\" TIMESTAMP DEFAULT CURRENT_TIMESTAMP"));
    }

    #[test]
    fn derived_indices_render_with_their_given_name() {
        let tables = sample_tables();
        let index_sql = create_index_sql(&tables[1], &tables[1].indices[0]);
        assert_eq!(
            index_sql,
            "CREATE INDEX IF NOT EXISTS \"idx_nvd_entries_cve_id\" \
             ON \"cve\".\"nvd_entries\" (\"cve_id\");"
        );
    }

    #[test]
    fn trigger_only_for_main_base_tables() {
        let statements = schema_statements(&sample_tables());
        let triggers: Vec<&String> = statements
            .iter()
            .filter(|statement| statement.contains("CREATE OR REPLACE TRIGGER"))
            .collect();
        assert_eq!(triggers.len(), 1);
        assert!(triggers[0].contains("\"trg_vulnerabilities_date_modified\""));
        assert!(triggers[0].contains("BEFORE UPDATE ON \"vulnerabilities\""));
    }

    #[test]
    fn trigger_function_touches_only_date_modified() {
        assert!(CREATE_DATE_MODIFIED_FUNCTION.contains("NEW.\"date_modified\""));
        assert!(!CREATE_DATE_MODIFIED_FUNCTION.contains("date_created"));
    }

    #[test]
    fn statements_come_out_in_dependency_order() {
        let statements = schema_statements(&sample_tables());
        let position = |needle: &str| {
            statements
                .iter()
                .position(|statement| statement.contains(needle))
                .unwrap()
        };

        assert_eq!(statements[0], CREATE_CVE_SCHEMA);
        assert!(position("CREATE OR REPLACE FUNCTION") < position("CREATE TABLE"));
        assert!(position("CREATE TABLE") < position("CREATE INDEX"));
        assert!(position("CREATE INDEX") < position("CREATE OR REPLACE TRIGGER"));
    }

    #[test]
    fn surviving_inline_requests_get_a_default_named_index() {
        // Inline flags are only stripped on the nvd-base path.
        let table = TableDef::cwe_base(
            "cwe_entries",
            vec![ColumnDef::new("name", ColumnType::Text).indexed()],
        );
        let statements = schema_statements(&[table]);
        assert!(statements
            .iter()
            .any(|statement| statement.contains("\"cwe_entries_name_idx\"")));
    }
}
