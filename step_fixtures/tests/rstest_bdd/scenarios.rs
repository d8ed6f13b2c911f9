//! Binds the feature files to the step registry.

use crate::fixtures::{RegistrationContext, registration_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/step_registration.feature",
    fixtures = [registration_context: RegistrationContext]
);
