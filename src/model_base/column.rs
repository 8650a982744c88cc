use serde::{Deserialize, Serialize};

/// SQL types used by the vulnerability tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    BigInt,
    Real,
    Boolean,
    Text,
    /// `CHARACTER VARYING(n)`
    VarChar(usize),
    Timestamp,
    TimestampTz,
    Jsonb,
}

impl ColumnType {
    pub fn sql(self) -> String {
        match self {
            Self::Integer => "INTEGER".to_owned(),
            Self::BigInt => "BIGINT".to_owned(),
            Self::Real => "REAL".to_owned(),
            Self::Boolean => "BOOLEAN".to_owned(),
            Self::Text => "TEXT".to_owned(),
            Self::VarChar(max_characters) => format!("CHARACTER VARYING({})", max_characters),
            Self::Timestamp => "TIMESTAMP".to_owned(),
            Self::TimestampTz => "TIMESTAMPTZ".to_owned(),
            Self::Jsonb => "JSONB".to_owned(),
        }
    }
}

/// Server-side default for a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnDefault {
    CurrentTimestamp,
    Expression(String),
}

impl ColumnDefault {
    fn sql(&self) -> &str {
        match self {
            Self::CurrentTimestamp => "CURRENT_TIMESTAMP",
            Self::Expression(expression) => expression,
        }
    }
}

/// A single declared column.
///
/// Built with [`ColumnDef::new`] and the builder methods:
///
/// ```
/// use cve_models::model_base::{ColumnDef, ColumnType};
///
/// let column = ColumnDef::new("cve_id", ColumnType::VarChar(32))
///     .not_null()
///     .indexed();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub ty: ColumnType,
    pub primary_key: bool,
    pub autoincrement: bool,
    pub not_null: bool,
    /// Inline index request. On cve-schema tables, index derivation strips
    /// this flag and emits a named index in its place; everywhere else the
    /// schema layer emits its own default-named index for it.
    pub index: bool,
    pub default: Option<ColumnDefault>,
}

impl ColumnDef {
    pub fn new(name: &str, ty: ColumnType) -> Self {
        Self {
            name: name.to_owned(),
            ty,
            primary_key: false,
            autoincrement: false,
            not_null: false,
            index: false,
            default: None,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn autoincrement(mut self) -> Self {
        self.autoincrement = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn indexed(mut self) -> Self {
        self.index = true;
        self
    }

    pub fn default_current_timestamp(mut self) -> Self {
        self.default = Some(ColumnDefault::CurrentTimestamp);
        self
    }

    pub fn default_expression(mut self, expression: &str) -> Self {
        self.default = Some(ColumnDefault::Expression(expression.to_owned()));
        self
    }

    /// DDL fragment for this column inside a `CREATE TABLE` statement.
    pub fn sql(&self) -> String {
        let mut fragment = format!("\"{}\" {}", self.name, self.type_sql());
        if self.primary_key {
            fragment.push_str(" PRIMARY KEY");
        }
        if self.not_null {
            fragment.push_str(" NOT NULL");
        }
        if let Some(ref default) = self.default {
            fragment.push_str(" DEFAULT ");
            fragment.push_str(default.sql());
        }
        fragment
    }

    fn type_sql(&self) -> String {
        if self.autoincrement {
            // Serial types carry their own sequence-backed default.
            match self.ty {
                ColumnType::BigInt => return "BIGSERIAL".to_owned(),
                _ => return "SERIAL".to_owned(),
            }
        }
        self.ty.sql()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoincrement_primary_key_renders_as_serial() {
        let column = ColumnDef::new("id", ColumnType::Integer)
            .autoincrement()
            .primary_key();
        assert_eq!(column.sql(), "\"id\" SERIAL PRIMARY KEY");
    }

    #[test]
    fn timestamp_default_renders_current_timestamp() {
        let column =
            ColumnDef::new("date_created", ColumnType::Timestamp).default_current_timestamp();
        assert_eq!(
            column.sql(),
            "\"date_created\" TIMESTAMP DEFAULT CURRENT_TIMESTAMP"
        );
    }

    #[test]
    fn varchar_carries_character_limit() {
        let column = ColumnDef::new("cve_id", ColumnType::VarChar(32)).not_null();
        assert_eq!(column.sql(), "\"cve_id\" CHARACTER VARYING(32) NOT NULL");
    }

    #[test]
    fn inline_index_flag_does_not_change_the_column_fragment() {
        let plain = ColumnDef::new("published", ColumnType::TimestampTz);
        let flagged = plain.clone().indexed();
        assert_eq!(plain.sql(), flagged.sql());
    }
}
