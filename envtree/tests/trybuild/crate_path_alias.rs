use envtree::{EnvTree, Populate, Strictness};

/// Uses the real crate name as a self-referential alias so the workspace
/// does not need a renamed dependency.
#[derive(Debug, Default, Populate)]
#[envtree(crate = "envtree", name = "ALIAS")]
struct AliasConfig {
    value: String,
    count: i64,
}

fn main() {
    let mut config = AliasConfig::default();
    let result = EnvTree::from_vars([("ALIAS_COUNT", "2")], "^ALIAS", "_")
        .and_then(|tree| tree.populate(&mut config, Strictness::Lenient));
    let _: envtree::EnvResult<()> = result;
}
