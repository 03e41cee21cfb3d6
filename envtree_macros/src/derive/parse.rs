//! Input parsing for the `Populate` derive macro.
//!
//! Gathers the struct identifier, its named fields and all `#[envtree(...)]`
//! metadata in one pass so that expansion can fail fast with a spanned
//! error.

use heck::ToShoutySnakeCase;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr};

/// Struct-level attributes.
#[derive(Default)]
pub(crate) struct StructAttrs {
    pub name: Option<String>,
    pub walker: bool,
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub rename: Option<String>,
}

/// A named field and the key-chain component it maps to.
pub(crate) struct RecordField {
    pub ident: syn::Ident,
    pub key: String,
}

/// Everything expansion needs to know about the derive input.
pub(crate) struct Record {
    pub ident: syn::Ident,
    pub name: String,
    pub walker: bool,
    pub crate_path: Option<syn::Path>,
    pub fields: Vec<RecordField>,
}

/// Iterates every `#[envtree(...)]` attribute and applies `f` to each entry.
fn parse_envtree<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("envtree")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    meta.value()?
        .parse::<LitStr>()
        .map_err(|err| syn::Error::new(err.span(), format!("{key} must be a string")))
}

fn non_empty(lit: &LitStr, key: &str) -> syn::Result<String> {
    let value = lit.value();
    if value.is_empty() {
        return Err(syn::Error::new(lit.span(), format!("{key} must not be empty")));
    }
    Ok(value)
}

/// Extracts `#[envtree(...)]` metadata applied to a struct.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_envtree(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("name") => {
                out.name = Some(non_empty(&lit_str(meta, "name")?, "name")?);
                Ok(())
            }
            Some("walker") => {
                // Accept both `walker` and `walker = true`.
                out.walker = if meta.input.peek(syn::Token![=]) {
                    meta.value()?.parse::<syn::LitBool>()?.value
                } else {
                    true
                };
                Ok(())
            }
            Some("crate") => {
                let lit = lit_str(meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&lit.value()).map_err(|e| syn::Error::new(lit.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            }
            _ => Err(meta.error("unknown envtree attribute; expected `name`, `walker` or `crate`")),
        }
    })?;
    Ok(out)
}

/// Extracts `#[envtree(...)]` metadata applied to a field.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_envtree(attrs, |meta| {
        if meta.path.is_ident("rename") {
            out.rename = Some(non_empty(&lit_str(meta, "rename")?, "rename")?);
            Ok(())
        } else {
            Err(meta.error("unknown envtree field attribute; expected `rename`"))
        }
    })?;
    Ok(out)
}

/// Default key-chain component for an identifier.
pub(crate) fn default_key(ident: &syn::Ident) -> String {
    let raw = ident.to_string();
    raw.strip_prefix("r#")
        .unwrap_or(&raw)
        .to_shouty_snake_case()
}

/// Gathers information from the user-provided struct.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<Record> {
    let attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Populate requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Populate can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "Populate requires named fields"));
        };
        let key = parse_field_attrs(&field.attrs)?
            .rename
            .unwrap_or_else(|| default_key(&ident));
        fields.push(RecordField { ident, key });
    }

    Ok(Record {
        name: attrs.name.unwrap_or_else(|| default_key(&input.ident)),
        ident: input.ident.clone(),
        walker: attrs.walker,
        crate_path: attrs.crate_path,
        fields,
    })
}
