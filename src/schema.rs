//! DDL for the session record table.
//!
//! Used both by [`SeaOrmRecordStore`](crate::SeaOrmRecordStore), which runs them
//! on start to create a missing table, and by the optional migration.

use sea_orm::sea_query::{
    Alias, ColumnDef, Index, IndexCreateStatement, IntoTableRef, Table, TableCreateStatement,
    TableRef,
};

use crate::entity::session::Column;

/// Reference to `table`, qualified by `schema` when one is given.
pub fn table_ref(table: &str, schema: Option<&str>) -> TableRef {
    match schema {
        Some(schema) => (Alias::new(schema), Alias::new(table)).into_table_ref(),
        None => Alias::new(table).into_table_ref(),
    }
}

/// `CREATE TABLE IF NOT EXISTS` for the session records.
pub fn create_table(table: TableRef) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(Column::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Column::SessionId).string().not_null())
        .col(ColumnDef::new(Column::Data).text().not_null())
        .col(ColumnDef::new(Column::ExpiresAt).big_integer().not_null())
        .col(ColumnDef::new(Column::UpdatedAt).big_integer().not_null())
        .col(ColumnDef::new(Column::UserId).string().null())
        .to_owned()
}

/// The unique session id index plus the lookup indexes for GC and user scans.
pub fn create_indexes(table_name: &str, table: TableRef) -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .if_not_exists()
            .name(format!("idx_{table_name}_session_id"))
            .table(table.clone())
            .col(Column::SessionId)
            .unique()
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name(format!("idx_{table_name}_expires_at"))
            .table(table.clone())
            .col(Column::ExpiresAt)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name(format!("idx_{table_name}_user_id"))
            .table(table)
            .col(Column::UserId)
            .to_owned(),
    ]
}
