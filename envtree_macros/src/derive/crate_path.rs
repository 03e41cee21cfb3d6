//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[envtree(crate = "...")]` attribute value into the
//! tokens generated code uses to reach the runtime crate.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolves the crate path, defaulting to `::envtree`.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::envtree }, |path| quote! { #path })
}

#[cfg(test)]
mod tests {
    //! Unit tests for crate path resolution with default and custom paths.

    use super::*;
    use anyhow::Result;
    use rstest::rstest;

    #[rstest]
    #[case::default(None, ":: envtree")]
    #[case::custom(Some("my_alias"), "my_alias")]
    #[case::nested(Some("deps::envtree"), "deps :: envtree")]
    fn resolve_produces_expected_tokens(
        #[case] input: Option<&str>,
        #[case] expected: &str,
    ) -> Result<()> {
        let parsed = input.map(syn::parse_str::<syn::Path>).transpose()?;
        let tokens = resolve(parsed.as_ref());
        assert_eq!(tokens.to_string(), expected);
        Ok(())
    }
}
