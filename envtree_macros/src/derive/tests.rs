//! Unit tests for derive input parsing and token generation.

use super::expand;
use super::parse::{default_key, parse_input};
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

#[rstest]
#[case::single("port", "PORT")]
#[case::snake("usage_limit", "USAGE_LIMIT")]
#[case::camel("ServerConfig", "SERVER_CONFIG")]
#[case::raw("r#type", "TYPE")]
#[case::digits("CONFIG3", "CONFIG3")]
fn default_keys_are_shouty_snake_case(#[case] ident: &str, #[case] expected: &str) -> Result<()> {
    let parsed: syn::Ident = syn::parse_str(ident)?;
    ensure!(
        default_key(&parsed) == expected,
        "{ident} mapped to {}",
        default_key(&parsed)
    );
    Ok(())
}

#[test]
fn parses_struct_and_field_attributes() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[envtree(name = "ROOT", walker, crate = "deps::envtree")]
        struct Settings {
            #[envtree(rename = "LISTEN_PORT")]
            port: i64,
            host: String,
        }
    };
    let record = parse_input(&input).map_err(|err| anyhow!(err))?;
    ensure!(record.name == "ROOT", "unexpected name {}", record.name);
    ensure!(record.walker, "walker flag not parsed");
    ensure!(record.crate_path.is_some(), "crate path not parsed");
    let keys: Vec<&str> = record.fields.iter().map(|f| f.key.as_str()).collect();
    ensure!(keys == ["LISTEN_PORT", "HOST"], "unexpected keys {keys:?}");
    Ok(())
}

#[test]
fn record_name_defaults_to_the_struct_ident() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct MailerConfig { enabled: bool }
    };
    let record = parse_input(&input).map_err(|err| anyhow!(err))?;
    ensure!(record.name == "MAILER_CONFIG", "unexpected name {}", record.name);
    ensure!(!record.walker, "walker must be opt-in");
    Ok(())
}

#[test]
fn walker_accepts_an_explicit_boolean() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[envtree(walker = false)]
        struct Quiet { level: i64 }
    };
    let record = parse_input(&input).map_err(|err| anyhow!(err))?;
    ensure!(!record.walker, "walker = false must disable the hook");
    Ok(())
}

#[rstest]
#[case::tuple(parse_quote! { struct Pair(i64, i64); }, "named fields")]
#[case::enumeration(parse_quote! { enum Mode { A, B } }, "only be derived for structs")]
#[case::unknown_struct_attr(
    parse_quote! { #[envtree(prefix = "X")] struct S { a: i64 } },
    "unknown envtree attribute"
)]
#[case::unknown_field_attr(
    parse_quote! { struct S { #[envtree(skip)] a: i64 } },
    "unknown envtree field attribute"
)]
#[case::empty_rename(
    parse_quote! { struct S { #[envtree(rename = "")] a: i64 } },
    "rename must not be empty"
)]
#[case::non_string_name(
    parse_quote! { #[envtree(name = 3)] struct S { a: i64 } },
    "name must be a string"
)]
fn rejects_invalid_input(#[case] input: DeriveInput, #[case] message: &str) -> Result<()> {
    let Err(err) = parse_input(&input) else {
        return Err(anyhow!("expected an error mentioning {message:?}"));
    };
    ensure!(
        err.to_string().contains(message),
        "error {err} does not mention {message:?}"
    );
    Ok(())
}

#[test]
fn expansion_lists_fields_in_declaration_order() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Root { x: i64, y: Child }
    };
    let tokens = expand(&input).map_err(|err| anyhow!(err))?.to_string();
    let x = tokens.find("\"X\"").ok_or_else(|| anyhow!("X missing: {tokens}"))?;
    let y = tokens.find("\"Y\"").ok_or_else(|| anyhow!("Y missing: {tokens}"))?;
    ensure!(x < y, "fields out of order: {tokens}");
    ensure!(tokens.contains("\"ROOT\""), "record name missing: {tokens}");
    ensure!(!tokens.contains("walk_hook"), "walk hook must be opt-in: {tokens}");
    Ok(())
}

#[test]
fn expansion_wires_the_walker_when_requested() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[envtree(walker)]
        struct Checked { port: i64 }
    };
    let tokens = expand(&input).map_err(|err| anyhow!(err))?.to_string();
    ensure!(tokens.contains("walk_hook"), "walk hook missing: {tokens}");
    ensure!(tokens.contains("StructWalker"), "walker trait missing: {tokens}");
    Ok(())
}

#[test]
fn expansion_honours_the_crate_alias() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[envtree(crate = "renamed")]
        struct Aliased { port: i64 }
    };
    let tokens = expand(&input).map_err(|err| anyhow!(err))?.to_string();
    ensure!(tokens.contains("renamed :: Populate"), "alias unused: {tokens}");
    ensure!(!tokens.contains(":: envtree ::"), "default path leaked: {tokens}");
    Ok(())
}
