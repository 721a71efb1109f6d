use super::{Formatter, Params, ToCql};

/// Comma delimited, with a space after each comma
pub(super) struct Comma<L>(pub(super) L);

/// Delimited by an arbitrary separator
pub(super) struct Delimited<L>(pub(super) L, pub(super) &'static str);

/// Period delimited
pub(super) struct Period<L>(pub(super) L);

impl<L> ToCql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToCql,
{
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        Delimited(self.0, ", ").to_cql(f);
    }
}

impl<L> ToCql for Delimited<L>
where
    L: IntoIterator,
    L::Item: ToCql,
{
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = self.1;
        }
    }
}

impl<L> ToCql for Period<L>
where
    L: IntoIterator,
    L::Item: ToCql,
{
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        Delimited(self.0, ".").to_cql(f);
    }
}
