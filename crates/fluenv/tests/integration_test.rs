//! End-to-end tests for environment variable configuration loading.
//!
//! These tests exercise the whole pipeline: environment snapshot, prefix
//! filtering, key expansion, table construction, and the configuration
//! surface (point lookup, sections, binding). Tests that touch the real
//! process environment use `temp_env` and `serial_test` to stay isolated.

use fluenv::{
    ConfigError, Configuration, ConfigurationBuilder, EnvConfigurationSource, MapEnv,
};
use serde::Deserialize;
use serial_test::serial;

/// Build a configuration from an in-memory snapshot, as production code
/// would from the process environment.
fn configuration_from(prefix: &str, vars: &[(&str, &str)]) -> Configuration {
    let env = MapEnv::from_pairs(vars.iter().copied());
    let table = EnvConfigurationSource::with_prefix(prefix)
        .load_from(&env)
        .expect("load should succeed");

    struct Loaded(fluenv::ConfigMap);
    impl fluenv::ConfigurationSource for Loaded {
        fn load(&self) -> Result<fluenv::ConfigMap, ConfigError> {
            Ok(self.0.clone())
        }
    }

    ConfigurationBuilder::new()
        .add_source(Loaded(table))
        .build()
        .expect("build should succeed")
}

#[test]
fn underscore_separated_variables_land_in_their_section() {
    let config = configuration_from(
        "PREFIX_",
        &[
            ("PREFIX_SECTION_A_VARIABLE_ONE", "ao"),
            ("PREFIX_SECTION_A_VARIABLE_TWO", "at"),
        ],
    );

    let section = config.section("SectionA");
    assert_eq!(section.get("VariableOne"), Some("ao"));
    assert_eq!(section.get("VariableTwo"), Some("at"));
}

#[test]
fn doubled_delimiter_marks_an_explicit_section_boundary() {
    let config = configuration_from("PREFIX_", &[("PREFIX_SECTION_B__VARIABLE_ONE", "bo")]);

    assert_eq!(config.section("SectionB").get("VariableOne"), Some("bo"));
    assert_eq!(config.get("MicrosoftFormat:Variable"), None);
}

#[test]
fn microsoft_format_names_are_addressable_directly() {
    let config = configuration_from("PREFIX_", &[("PREFIX_MicrosoftFormat__Variable", "ms")]);
    assert_eq!(config.get("MicrosoftFormat:Variable"), Some("ms"));
    assert_eq!(config.section("MicrosoftFormat").get("Variable"), Some("ms"));
}

#[derive(Debug, Deserialize)]
struct ExampleSection {
    variable_one: String,
    variable_two: String,
}

#[test]
fn section_binds_onto_a_record_type() {
    let config = configuration_from(
        "PREFIX_",
        &[
            ("PREFIX_SECTION_C_VARIABLE_ONE", "bo"),
            ("PREFIX_SECTION_C_VARIABLE_TWO", "bt"),
        ],
    );

    let bound: ExampleSection = config
        .section("SectionC")
        .bind()
        .expect("binding should succeed")
        .expect("section has data");

    assert_eq!(bound.variable_one, "bo");
    assert_eq!(bound.variable_two, "bt");
}

#[test]
fn binding_an_absent_section_yields_none() {
    let config = configuration_from("PREFIX_", &[("PREFIX_SECTION_C_VARIABLE_ONE", "bo")]);

    let bound = config
        .section("Elsewhere")
        .bind::<ExampleSection>()
        .expect("absence is not an error");
    assert!(bound.is_none());
}

#[test]
fn binding_failure_reports_the_section() {
    // SectionC exists but is missing variable_two.
    let config = configuration_from("PREFIX_", &[("PREFIX_SECTION_C_VARIABLE_ONE", "bo")]);

    let err = config
        .section("SectionC")
        .bind::<ExampleSection>()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Binding { section, .. } if section == "SectionC"));
}

#[test]
fn binding_prefers_the_exact_leaf_key_when_several_match() {
    // Both names survive the load (their candidates differ beyond case) and
    // both leaf keys match the `variable_one` field; the exact-modulo-case
    // key must win however the table happens to iterate.
    let config = configuration_from(
        "",
        &[
            ("SECTION_D_VARIABLE_ONE", "fuzzy"),
            ("SectionD:Variable_One", "exact"),
        ],
    );

    #[derive(Debug, Deserialize)]
    struct SectionD {
        variable_one: String,
    }

    let bound: SectionD = config
        .section("SectionD")
        .bind()
        .expect("binding should succeed")
        .expect("section has data");
    assert_eq!(bound.variable_one, "exact");
}

#[test]
fn unmatched_prefix_leaves_no_trace_in_the_table() {
    let config = configuration_from("PREFIX_", &[("UNRELATED_SECTION_VARIABLE", "x")]);

    assert_eq!(config.iter().count(), 0);
    assert_eq!(config.get("UNRELATED_SECTION_VARIABLE"), None);
    assert_eq!(config.get("SECTION:VARIABLE"), None);
}

#[test]
fn colliding_candidates_fail_the_whole_load() {
    let env = MapEnv::from_pairs([
        ("SECTION_B__VARIABLE_ONE", "bo"),
        ("SECTION_B_VARIABLE_ONE", "clash"),
    ]);
    let err = EnvConfigurationSource::new().load_from(&env).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateKey { .. }));
}

#[test]
#[serial]
fn load_reads_the_real_process_environment() {
    temp_env::with_vars(
        [
            ("FLUENV_TEST_SECTION_A_VARIABLE_ONE", Some("ao")),
            ("FLUENV_TEST_SECTION_A_VARIABLE_TWO", Some("at")),
        ],
        || {
            let config = ConfigurationBuilder::new()
                .add_source(EnvConfigurationSource::with_prefix("FLUENV_TEST_"))
                .build()
                .expect("build should succeed");

            let section = config.section("SectionA");
            assert_eq!(section.get("VariableOne"), Some("ao"));
            assert_eq!(section.get("VariableTwo"), Some("at"));
        },
    );
}

#[test]
#[serial]
fn rebuilding_takes_a_fresh_snapshot() {
    let source = || EnvConfigurationSource::with_prefix("FLUENV_RELOAD_");

    temp_env::with_vars([("FLUENV_RELOAD_VALUE", Some("before"))], || {
        let config = ConfigurationBuilder::new()
            .add_source(source())
            .build()
            .unwrap();
        assert_eq!(config.get("VALUE"), Some("before"));
    });

    temp_env::with_vars([("FLUENV_RELOAD_VALUE", Some("after"))], || {
        let config = ConfigurationBuilder::new()
            .add_source(source())
            .build()
            .unwrap();
        assert_eq!(config.get("VALUE"), Some("after"));
    });
}
