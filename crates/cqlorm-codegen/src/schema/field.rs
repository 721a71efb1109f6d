use super::ErrorSet;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// The `#[name("...")]` annotation
    pub(crate) name: Option<syn::LitStr>,

    /// The `#[cql("...")]` annotation
    pub(crate) cql: Option<syn::LitStr>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut name = None;
        let mut cql = None;

        for attr in &field.attrs {
            if attr.path().is_ident("name") {
                if name.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[name] attribute"));
                } else {
                    name = Some(attr.parse_args::<syn::LitStr>()?);
                }
            } else if attr.path().is_ident("cql") {
                if cql.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[cql] attribute"));
                } else {
                    cql = Some(attr.parse_args::<syn::LitStr>()?);
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            ident: ident.clone(),
            ty: field.ty.clone(),
            name,
            cql,
        })
    }

    /// True when the field maps to no column. The first non-empty segment
    /// of the `name` annotation is `-`.
    pub(crate) fn is_ignored(&self) -> bool {
        let Some(name) = &self.name else {
            return false;
        };

        name.value()
            .split(',')
            .map(str::trim)
            .find(|segment| !segment.is_empty())
            == Some("-")
    }
}
