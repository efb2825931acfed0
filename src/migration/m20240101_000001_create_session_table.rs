use sea_orm_migration::prelude::*;

use crate::config::DEFAULT_COLLECTION_NAME;
use crate::schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = schema::table_ref(DEFAULT_COLLECTION_NAME, None);
        manager
            .create_table(schema::create_table(table.clone()))
            .await?;
        for index in schema::create_indexes(DEFAULT_COLLECTION_NAME, table) {
            manager.create_index(index).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new(DEFAULT_COLLECTION_NAME))
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}
