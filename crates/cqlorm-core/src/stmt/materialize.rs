use super::{Dest, FieldSlot};
use crate::schema::{Record, TableSchema};

/// Builds the scan destinations for one row.
///
/// `columns` is the column list of the `SELECT` in textual order. The i-th
/// destination addresses the field of `record` whose byte offset matches the
/// descriptor of the i-th column. Columns without a matching field get
/// [`Dest::Discard`].
pub fn destinations<'a, R: Record>(
    schema: &'a TableSchema,
    columns: &[&str],
    record: &'a mut R,
) -> Vec<Dest<'a>> {
    let mut slots: Vec<Option<FieldSlot<'a>>> = record.slots().into_iter().map(Some).collect();

    columns
        .iter()
        .map(move |column| {
            let Some(field) = schema.column(column) else {
                return Dest::Discard;
            };

            let (Some(ty), Some(entry)) = (
                field.ty.as_ref(),
                slots
                    .iter_mut()
                    .find(|slot| matches!(slot, Some(slot) if slot.offset == field.offset)),
            ) else {
                return Dest::Discard;
            };

            match entry.take() {
                Some(FieldSlot { slot, .. }) => Dest::Column {
                    ty,
                    optional: field.optional,
                    slot,
                },
                None => Dest::Discard,
            }
        })
        .collect()
}
