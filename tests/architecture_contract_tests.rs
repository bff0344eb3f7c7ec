//! Architecture contract tests.

mod support;

use support::architecture::{
    find_lines_containing, find_non_export_lines_in_mod_files, path_exists, public_fn_names,
};

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "tracing::",
            "futures_util::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = find_lines_containing(
        "src/application",
        &["crate::adapter::", "crate::infrastructure::"],
    );
    assert!(
        hits.is_empty(),
        "application layer should not import adapters directly: {hits:#?}"
    );
}

#[test]
fn ports_depend_only_on_domain() {
    let hits = find_lines_containing(
        "src/port",
        &["crate::adapter", "crate::application", "crate::infrastructure"],
    );
    assert!(
        hits.is_empty(),
        "ports should only reference domain types: {hits:#?}"
    );
}

#[test]
fn arbitrage_engine_is_synchronous() {
    let hits = find_lines_containing(
        "src/application",
        &["async fn aggregate", "async fn evaluate("],
    );
    assert!(
        hits.is_empty(),
        "aggregation and evaluation must stay pure and synchronous: {hits:#?}"
    );
}

#[test]
fn composition_root_lives_in_infrastructure() {
    assert!(
        path_exists("src/infrastructure/bootstrap.rs"),
        "runtime wiring should live in infrastructure/bootstrap.rs"
    );
    let hits = find_lines_containing("src/adapter/inbound/cli", &["FixtureSource"]);
    assert!(
        hits.is_empty(),
        "CLI should build sources through the bootstrap: {hits:#?}"
    );
}

#[test]
fn mod_rs_is_export_only() {
    let violations = find_non_export_lines_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found non-export content in mod.rs files: {violations:#?}"
    );
}

#[test]
fn every_output_helper_has_a_caller() {
    let unused: Vec<String> = public_fn_names("src/adapter/inbound/cli/output.rs")
        .into_iter()
        .filter(|name| {
            let path = format!("output::{name}");
            !find_lines_containing("src", &[path.as_str()])
                .iter()
                .any(|(_, _, line)| {
                    line.match_indices(path.as_str()).any(|(at, _)| {
                        !line[at + path.len()..]
                            .starts_with(|c: char| c.is_alphanumeric() || c == '_')
                    })
                })
        })
        .collect();
    assert!(
        unused.is_empty(),
        "output helpers with no caller: {unused:#?}"
    );
}
