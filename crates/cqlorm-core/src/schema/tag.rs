use super::Role;
use crate::{Error, Result};

/// The parsed annotations of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Column name; `-` for ignored fields.
    pub column: String,

    pub role: Role,

    /// The `date` token was present.
    pub date: bool,
}

#[derive(Debug, Default)]
struct Tokens {
    pk: bool,
    ck: bool,
    is_static: bool,
    date: bool,
}

impl Tag {
    /// Parses and validates the `name` and `cql` annotations of a field.
    ///
    /// `name` falls back to `ident` when the field carries no `name`
    /// annotation.
    pub fn parse(ident: &str, name: Option<&str>, cql: &str) -> Result<Tag> {
        let name = name.unwrap_or(ident);

        let Some(column) = segments(name).next() else {
            return Err(Error::invalid_schema(format!(
                "field `{ident}` has an empty `name` annotation"
            )));
        };

        if column == "-" {
            if segments(cql).next().is_some() {
                return Err(Error::invalid_schema(format!(
                    "field `{ident}` is ignored but has `cql` annotation `{cql}`"
                )));
            }

            return Ok(Tag {
                column: column.to_string(),
                role: Role::Ignored,
                date: false,
            });
        }

        let mut tokens = Tokens::default();

        for token in segments(cql) {
            match token {
                "pk" => tokens.pk = true,
                "ck" => tokens.ck = true,
                "static" => tokens.is_static = true,
                "date" => tokens.date = true,
                _ => {
                    return Err(Error::invalid_schema(format!(
                        "field `{ident}` has unknown `cql` token `{token}`"
                    )))
                }
            }
        }

        if tokens.pk && tokens.ck {
            return Err(Error::invalid_schema(format!(
                "field `{ident}` cannot be both `pk` and `ck`"
            )));
        }

        if tokens.is_static && (tokens.pk || tokens.ck) {
            return Err(Error::invalid_schema(format!(
                "field `{ident}` cannot be both `static` and a key"
            )));
        }

        let role = if tokens.pk {
            Role::PartitionKey
        } else if tokens.ck {
            Role::ClusteringKey
        } else if tokens.is_static {
            Role::Static
        } else {
            Role::Regular
        };

        Ok(Tag {
            column: column.to_string(),
            role,
            date: tokens.date,
        })
    }
}

/// Non-empty, trimmed comma-separated segments.
fn segments(src: &str) -> impl Iterator<Item = &str> {
    src.split(',').map(str::trim).filter(|segment| !segment.is_empty())
}
