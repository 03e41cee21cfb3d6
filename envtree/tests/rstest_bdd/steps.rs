//! Step definitions for the environment tree scenarios.

use anyhow::{Result, anyhow, ensure};
use envtree::{EnvError, EnvTree, Strictness};

use crate::fixtures::{Settings, TreeState};
use rstest_bdd_macros::{given, then, when};

fn chain(path: &str) -> Vec<&str> {
    path.split_whitespace().collect()
}

fn built_tree(tree_state: &TreeState) -> Result<EnvTree> {
    let built = tree_state
        .tree
        .take()
        .ok_or_else(|| anyhow!("the tree has not been built"))?;
    let tree = built.map_err(|err| anyhow!(err))?;
    tree_state.tree.set(Ok(tree.clone()));
    Ok(tree)
}

#[given("the variable {key} is {value}")]
fn add_variable(tree_state: &TreeState, key: String, value: String) {
    let mut vars = tree_state.vars.take().unwrap_or_default();
    vars.insert(key, value);
    tree_state.vars.set(vars);
}

#[when("the tree is built with filter {filter} and delimiter {delimiter}")]
fn build_tree(tree_state: &TreeState, filter: String, delimiter: String) {
    let vars = tree_state.vars.take().unwrap_or_default();
    tree_state
        .tree
        .set(EnvTree::from_vars(vars, &filter, &delimiter));
}

fn populate(tree_state: &TreeState, mode: Strictness) -> Result<()> {
    let tree = built_tree(tree_state)?;
    let mut settings = Settings::default();
    let outcome = tree.populate(&mut settings, mode).map(|()| settings);
    tree_state.settings.set(outcome);
    Ok(())
}

#[when("the settings are populated strictly")]
fn populate_strictly(tree_state: &TreeState) -> Result<()> {
    populate(tree_state, Strictness::Strict)
}

#[when("the settings are populated leniently")]
fn populate_leniently(tree_state: &TreeState) -> Result<()> {
    populate(tree_state, Strictness::Lenient)
}

#[then("the value at {path} is {expected}")]
fn check_value(tree_state: &TreeState, path: String, expected: String) -> Result<()> {
    let tree = built_tree(tree_state)?;
    let actual = tree.find_string(&chain(&path))?;
    ensure!(actual == expected, "{path} read {actual:?}, expected {expected:?}");
    Ok(())
}

#[then("the children of {path} are {keys}")]
fn check_children(tree_state: &TreeState, path: String, keys: String) -> Result<()> {
    let tree = built_tree(tree_state)?;
    let actual = tree.children_keys(&chain(&path))?;
    let wanted: Vec<&str> = keys.split(',').collect();
    ensure!(actual == wanted, "children of {path} were {actual:?}");
    Ok(())
}

#[then("no node exists at {path}")]
fn check_absent(tree_state: &TreeState, path: String) -> Result<()> {
    let tree = built_tree(tree_state)?;
    ensure!(!tree.exists(&chain(&path)), "{path} should have been filtered out");
    Ok(())
}

#[then("building fails with an invalid filter error")]
fn check_invalid_filter(tree_state: &TreeState) -> Result<()> {
    match tree_state.tree.take() {
        Some(Err(EnvError::Regex(_))) => Ok(()),
        other => Err(anyhow!("expected a filter error, got {other:?}")),
    }
}

#[then("the settings point at {host} port {port:i64}")]
fn check_settings(tree_state: &TreeState, host: String, port: i64) -> Result<()> {
    let settings = tree_state
        .settings
        .take()
        .ok_or_else(|| anyhow!("settings were not populated"))?
        .map_err(|err| anyhow!(err))?;
    ensure!(settings.db.host == host, "host was {}", settings.db.host);
    ensure!(settings.db.port == port, "port was {}", settings.db.port);
    Ok(())
}

#[then("populating fails because a variable is missing")]
fn check_missing(tree_state: &TreeState) -> Result<()> {
    match tree_state.settings.take() {
        Some(Err(EnvError::NotFound)) => Ok(()),
        other => Err(anyhow!("expected NotFound, got {other:?}")),
    }
}
