use super::{map_type, FieldDecl, FieldDescriptor, Record, Role, Tag};
use crate::{Error, Result};

use indexmap::IndexMap;

/// The catalogued schema of one record type.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    /// Table name: the record type's simple name, lowercased.
    pub name: String,

    /// All declared fields, in declaration order. This is also the binding
    /// order of every statement.
    pub fields: Vec<FieldDescriptor>,

    /// Column name to field index, for every non-ignored field.
    columns: IndexMap<String, usize>,

    partition_keys: Vec<usize>,

    clustering_keys: Vec<usize>,
}

impl TableSchema {
    /// Catalogues a record type.
    pub fn of<R: Record>() -> Result<TableSchema> {
        TableSchema::from_decls(R::NAME, &R::fields())
    }

    /// Builds a schema from raw field declarations, validating every field.
    pub fn from_decls(type_name: &str, decls: &[FieldDecl]) -> Result<TableSchema> {
        Self::build(type_name, decls)
            .map_err(|err| err.context(format!("cannot catalogue record `{type_name}`")))
    }

    fn build(type_name: &str, decls: &[FieldDecl]) -> Result<TableSchema> {
        if decls.is_empty() {
            return Err(Error::invalid_schema(format!(
                "`{type_name}` is not a record type with named fields"
            )));
        }

        let mut schema = TableSchema {
            name: type_name.to_lowercase(),
            fields: Vec::with_capacity(decls.len()),
            columns: IndexMap::new(),
            partition_keys: vec![],
            clustering_keys: vec![],
        };

        for (index, decl) in decls.iter().enumerate() {
            let field = field(index, decl)?;

            match field.role {
                Role::PartitionKey => schema.partition_keys.push(index),
                Role::ClusteringKey => schema.clustering_keys.push(index),
                _ => {}
            }

            if !field.is_ignored() {
                if schema.columns.contains_key(&field.column_name) {
                    return Err(Error::invalid_schema(format!(
                        "column `{}` is declared more than once",
                        field.column_name
                    )));
                }

                schema.columns.insert(field.column_name.clone(), index);
            }

            schema.fields.push(field);
        }

        if schema.partition_keys.is_empty() {
            return Err(Error::invalid_schema(format!(
                "`{type_name}` has no partition key; annotate at least one field with `pk`"
            )));
        }

        Ok(schema)
    }

    /// Partition key fields in declaration order.
    pub fn partition_keys(&self) -> impl ExactSizeIterator<Item = &FieldDescriptor> + '_ {
        self.partition_keys.iter().map(|index| &self.fields[*index])
    }

    /// Clustering key fields in declaration order.
    pub fn clustering_keys(&self) -> impl ExactSizeIterator<Item = &FieldDescriptor> + '_ {
        self.clustering_keys.iter().map(|index| &self.fields[*index])
    }

    /// Fields that map to a column, in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.columns.values().map(|index| &self.fields[*index])
    }

    /// Looks up the field mapped to `name`.
    pub fn column(&self, name: &str) -> Option<&FieldDescriptor> {
        self.columns.get(name).map(|index| &self.fields[*index])
    }
}

fn field(index: usize, decl: &FieldDecl) -> Result<FieldDescriptor> {
    let tag = Tag::parse(decl.ident, decl.name, decl.cql)?;

    let (ty, optional) = if tag.role.is_ignored() {
        (None, false)
    } else {
        let (ty, optional) = map_type(decl.ty, tag.date)
            .map_err(|err| err.context(format!("field `{}`", decl.ident)))?;
        (Some(ty), optional)
    };

    Ok(FieldDescriptor {
        index,
        ident: decl.ident.to_string(),
        column_name: tag.column,
        role: tag.role,
        list: ty.as_ref().is_some_and(|ty| ty.is_list()),
        ty,
        optional,
        offset: decl.offset,
    })
}
