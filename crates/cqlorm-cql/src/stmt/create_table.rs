use super::{ColumnDef, Statement};

use cqlorm_core::TableSchema;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions, in field order
    pub columns: Vec<ColumnDef>,

    /// Partition key column names
    pub partition_key: Vec<String>,

    /// Clustering key column names
    pub clustering_key: Vec<String>,
}

impl Statement {
    pub fn create_table(schema: &TableSchema) -> Statement {
        CreateTable {
            name: schema.name.clone(),
            columns: schema.columns().filter_map(ColumnDef::from_field).collect(),
            partition_key: schema
                .partition_keys()
                .map(|field| field.column_name.clone())
                .collect(),
            clustering_key: schema
                .clustering_keys()
                .map(|field| field.column_name.clone())
                .collect(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
