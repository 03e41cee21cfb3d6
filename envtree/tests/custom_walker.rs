//! Validation through a record's `StructWalker`.
//!
//! The walker checks addresses and ports while the populator still performs
//! the assignment, so a single rejected value aborts the whole run.

use std::net::IpAddr;

use anyhow::{Result, anyhow, ensure};
use envtree::{EnvError, EnvResult, EnvTree, FieldMut, Populate, Strictness, StructWalker, WalkAction};
use rstest::rstest;
use test_helpers::env;

#[derive(Debug, Default, Populate)]
struct Server {
    ip: String,
    port: i64,
}

#[derive(Debug, Default, Populate)]
#[envtree(name = "CONFIG3", walker)]
struct Config {
    server1: Server,
    server2: Server,
}

fn validate_ip(tree: &EnvTree, key_chain: &[String]) -> EnvResult<()> {
    let ip = tree.find_string(key_chain)?;
    if ip.parse::<IpAddr>().is_err() {
        return Err(EnvError::validation(
            key_chain,
            format!("\"{ip}\" is not a valid IP"),
        ));
    }
    Ok(())
}

fn validate_port(tree: &EnvTree, key_chain: &[String]) -> EnvResult<()> {
    let port = tree.find_int(key_chain)?;
    if !(1..=65535).contains(&port) {
        return Err(EnvError::validation(
            key_chain,
            format!("\"{port}\" is not a valid port, must be between 1 and 65535"),
        ));
    }
    Ok(())
}

impl StructWalker for Config {
    fn walk(tree: &EnvTree, key_chain: &[String], _: &mut FieldMut<'_>) -> EnvResult<WalkAction> {
        match key_chain.last().map(String::as_str) {
            Some("IP") => validate_ip(tree, key_chain)?,
            Some("PORT") => validate_port(tree, key_chain)?,
            _ => {}
        }
        Ok(WalkAction::Continue)
    }
}

fn populate_from(pairs: &[(&str, &str)]) -> EnvResult<Config> {
    let _scope = env::scoped(pairs);
    let tree = EnvTree::new("^CONFIG3", "_")?;
    let mut config = Config::default();
    tree.populate(&mut config, Strictness::Strict)?;
    Ok(config)
}

#[test]
fn accepts_valid_servers() -> Result<()> {
    let config = populate_from(&[
        ("CONFIG3_SERVER1_IP", "127.0.0.1"),
        ("CONFIG3_SERVER1_PORT", "3000"),
        ("CONFIG3_SERVER2_IP", "::1"),
        ("CONFIG3_SERVER2_PORT", "4000"),
    ])?;
    ensure!(config.server1.ip == "127.0.0.1", "server1 ip {}", config.server1.ip);
    ensure!(config.server2.port == 4000, "server2 port {}", config.server2.port);
    Ok(())
}

#[rstest]
#[case::hostname(
    "CONFIG3_SERVER2_IP",
    "localhost",
    r#"Validation failed for 'CONFIG3_SERVER2_IP': "localhost" is not a valid IP"#
)]
#[case::port_range(
    "CONFIG3_SERVER1_PORT",
    "70000",
    r#"Validation failed for 'CONFIG3_SERVER1_PORT': "70000" is not a valid port, must be between 1 and 65535"#
)]
fn rejects_invalid_values(
    #[case] key: &str,
    #[case] value: &str,
    #[case] expected: &str,
) -> Result<()> {
    let mut vars = vec![
        ("CONFIG3_SERVER1_IP", "127.0.0.1"),
        ("CONFIG3_SERVER1_PORT", "3000"),
        ("CONFIG3_SERVER2_IP", "10.0.0.2"),
        ("CONFIG3_SERVER2_PORT", "4000"),
    ];
    for entry in &mut vars {
        if entry.0 == key {
            entry.1 = value;
        }
    }
    let err = populate_from(&vars)
        .err()
        .ok_or_else(|| anyhow!("{key}={value} must be rejected"))?;
    ensure!(err.to_string() == expected, "unexpected message {err}");
    Ok(())
}

#[test]
fn conversion_errors_from_the_walker_propagate() {
    let outcome = populate_from(&[
        ("CONFIG3_SERVER1_IP", "127.0.0.1"),
        ("CONFIG3_SERVER1_PORT", "http"),
    ]);
    assert!(matches!(outcome, Err(EnvError::WrongType { wanted: "int", .. })));
}
