//! Binds the feature files to the step registry.

use crate::fixtures::{TreeState, tree_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/env_tree.feature",
    fixtures = [tree_state: TreeState]
);
