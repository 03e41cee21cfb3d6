//! Shared fixtures for the behavioural scenarios.

use std::collections::BTreeMap;

use envtree::{EnvResult, EnvTree, Populate};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Database section of [`Settings`].
#[derive(Debug, Default, Populate)]
pub struct Db {
    pub host: String,
    pub port: i64,
}

/// Record populated by the settings scenarios.
#[derive(Debug, Default, Populate)]
#[envtree(name = "APP")]
pub struct Settings {
    pub db: Db,
}

/// State shared between the steps of one scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct TreeState {
    pub vars: Slot<BTreeMap<String, String>>,
    pub tree: Slot<EnvResult<EnvTree>>,
    pub settings: Slot<EnvResult<Settings>>,
}

/// Starts every scenario with no variables and no tree.
#[fixture]
pub fn tree_state() -> TreeState {
    TreeState::default()
}
