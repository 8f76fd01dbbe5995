//! Precedence and failure semantics of source chains.

use anyhow::{Result, anyhow, ensure};
use config_chain::{
    ChainError, ConfigAccess, DocumentSource, SourceChain, StaticMapSource,
};
use rstest::rstest;
use test_helpers::fixtures::{BROKEN_JSON, SERVICE_JSON, SERVICE_OVERRIDE_JSON, SERVICE_YAML};

fn to_anyhow<T>(result: config_chain::ChainResult<T>) -> Result<T> {
    result.map_err(|err| anyhow!(err.to_string()))
}

#[rstest]
fn later_sources_override_earlier_ones() -> Result<()> {
    let defaults: StaticMapSource = [("app", "a")].into_iter().collect();
    let config = to_anyhow(
        SourceChain::from_source(defaults)
            .with(DocumentSource::json(r#"{"app": "b"}"#))
            .build(),
    )?;
    ensure!(config.get_string("app") == "b");
    Ok(())
}

#[rstest]
fn multiple_documents_merge_key_by_key() -> Result<()> {
    let config = to_anyhow(
        SourceChain::from_source(DocumentSource::json(SERVICE_JSON))
            .with(DocumentSource::json(SERVICE_OVERRIDE_JSON))
            .build(),
    )?;
    ensure!(config.get_string("app") == "test");
    ensure!(config.get_integer("age") == 5);
    ensure!((config.get_float("price") - 20.5).abs() < f64::EPSILON);
    ensure!(!config.get_boolean("check"));
    ensure!(config.get_raw("non_existing").is_absent());
    Ok(())
}

#[rstest]
fn json_and_yaml_resolve_identically() -> Result<()> {
    let from_json = to_anyhow(SourceChain::from_source(DocumentSource::json(SERVICE_JSON)).build())?;
    let from_yaml = to_anyhow(SourceChain::from_source(DocumentSource::yaml(SERVICE_YAML)).build())?;
    ensure!(from_json == from_yaml);
    Ok(())
}

#[rstest]
fn later_sections_replace_earlier_sections() -> Result<()> {
    let config = to_anyhow(
        SourceChain::from_source(DocumentSource::json(r#"{"s": {"x": 1, "y": 2}}"#))
            .with(DocumentSource::yaml("s:\n  y: 9\n"))
            .build(),
    )?;
    let section = config
        .sub_section("s")
        .ok_or_else(|| anyhow!("expected section s"))?;
    ensure!(section.get_integer("y") == 9);
    ensure!(!section.contains_key("x"), "shallow merge must not keep x");
    Ok(())
}

#[rstest]
#[case::first(0)]
#[case::middle(1)]
#[case::last(2)]
fn a_broken_document_aborts_the_build(#[case] position: usize) -> Result<()> {
    let mut chain = SourceChain::new();
    for index in 0..3 {
        if index == position {
            chain.push(DocumentSource::json(BROKEN_JSON));
        } else {
            chain.push(DocumentSource::json(SERVICE_JSON));
        }
    }
    let err = chain
        .build()
        .err()
        .ok_or_else(|| anyhow!("expected the build to fail"))?;
    ensure!(
        matches!(&*err, ChainError::Parse { .. }),
        "unexpected error: {err}"
    );
    Ok(())
}

#[rstest]
fn builds_are_independent_and_repeatable() -> Result<()> {
    let chain = SourceChain::from_source(DocumentSource::json(SERVICE_JSON));
    let first = to_anyhow(chain.build())?;
    let second = to_anyhow(chain.build())?;
    ensure!(first == second);
    ensure!(chain.len() == 1);
    Ok(())
}

#[rstest]
fn an_empty_chain_resolves_to_zero_values() -> Result<()> {
    let chain = SourceChain::new();
    ensure!(chain.is_empty());
    let config = to_anyhow(chain.build())?;
    ensure!(config.is_empty());
    ensure!(config.get_string("x").is_empty());
    ensure!(config.get_integer("x") == 0);
    ensure!(!config.get_boolean("x"));
    Ok(())
}
