use crate::{stmt::Type, Error, Result};

/// Maps a Rust type name to its column type and optional flag.
///
/// `type_name` is the name reported by `core::any::type_name`; paths are
/// resolved by their last segment. A leading `Option` marks the column
/// optional, a `Vec` wraps the element type in `list<...>`. `date` selects
/// `date` over `timestamp` for timestamp fields and is ignored otherwise.
pub fn map_type(type_name: &str, date: bool) -> Result<(Type, bool)> {
    let compact: String = type_name.chars().filter(|c| !c.is_whitespace()).collect();
    let invalid = || Error::invalid_type(type_name.trim());

    let (src, optional) = match generic(&compact) {
        ("Option", Some(inner)) => (inner, true),
        _ => (compact.as_str(), false),
    };

    let ty = match generic(src) {
        ("Vec", Some(elem)) => Type::list(scalar(elem, date).ok_or_else(invalid)?),
        _ => scalar(src, date).ok_or_else(invalid)?,
    };

    Ok((ty, optional))
}

/// Maps a Rust type name to the CQL type spelling and optional flag.
pub fn cql_type(type_name: &str, date: bool) -> Result<(String, bool)> {
    let (ty, optional) = map_type(type_name, date)?;
    Ok((ty.to_string(), optional))
}

fn scalar(src: &str, date: bool) -> Option<Type> {
    let (name, None) = generic(src) else {
        return None;
    };

    match name {
        "bool" => Some(Type::Bool),
        "String" => Some(Type::Text),
        "i8" => Some(Type::I8),
        "i16" => Some(Type::I16),
        "i32" => Some(Type::I32),
        "i64" | "isize" => Some(Type::I64),
        "f32" => Some(Type::F32),
        "f64" => Some(Type::F64),
        "Timestamp" if date => Some(Type::Date),
        "Timestamp" => Some(Type::Timestamp),
        _ => None,
    }
}

/// Splits `path::Name<Args>` into `Name` and `Args`.
fn generic(src: &str) -> (&str, Option<&str>) {
    match (src.find('<'), src.strip_suffix('>')) {
        (Some(open), Some(body)) => (last_segment(&src[..open]), Some(&body[open + 1..])),
        _ => (last_segment(src), None),
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
