use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The columns every main-base table shares.
///
/// `date_created` and `date_modified` are both set by the database on insert;
/// `date_modified` is bumped by the update trigger afterwards. Fetch these
/// alongside the table's own columns with `sqlx::query_as`.
#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct BaseRow {
    pub id: i32,
    pub date_created: NaiveDateTime,
    pub date_modified: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db_api::consts::{DATE_CREATED, DATE_MODIFIED, ID},
        model_base::TableDef,
    };

    #[test]
    fn base_row_decodes_the_shared_timestamps() {
        let row: BaseRow = serde_json::from_str(
            r#"{
                "id": 3,
                "date_created": "2024-05-01T10:00:00",
                "date_modified": "2024-05-02T11:30:00"
            }"#,
        )
        .unwrap();

        assert_eq!(row.id, 3);
        assert!(row.date_modified > row.date_created);
    }

    #[test]
    fn base_row_fields_match_the_main_base_columns() {
        let row = BaseRow {
            id: 1,
            date_created: NaiveDateTime::default(),
            date_modified: NaiveDateTime::default(),
        };
        let value = serde_json::to_value(&row).unwrap();
        for field in [ID, DATE_CREATED, DATE_MODIFIED] {
            assert!(value.get(field).is_some(), "missing field {}", field);
        }

        // Field order mirrors the columns main_base prepends.
        let table = TableDef::main_base("vulnerabilities", Vec::new());
        let column_names: Vec<&str> = table
            .columns
            .iter()
            .map(|column| column.name.as_str())
            .collect();
        assert_eq!(column_names, [ID, DATE_CREATED, DATE_MODIFIED]);
    }
}
