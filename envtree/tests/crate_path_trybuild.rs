//! trybuild coverage for `#[envtree(crate = "...")]` support.
//!
//! The derive must accept an explicit runtime crate path and the generated
//! impls must compile against it.

#[test]
fn crate_path_alias_compiles() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/crate_path_alias.rs");
}
