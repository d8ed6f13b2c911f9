//! Shared fixtures for the behavioural suite.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use step_fixtures::StepModule;
use test_helpers::blog::ArticleFactory;

/// Scenario state shared between registration steps.
#[derive(Debug, Default, ScenarioState)]
pub struct RegistrationContext {
    pub module: Slot<StepModule>,
    pub factory: Slot<ArticleFactory>,
    pub failure: Slot<String>,
}

/// Creates an empty context for each scenario.
#[fixture]
pub fn registration_context() -> RegistrationContext {
    RegistrationContext::default()
}
