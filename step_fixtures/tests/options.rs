//! Integration tests for registry options and duplicate handling.

use anyhow::{Result, anyhow, ensure};
use step_fixtures::{
    DuplicatePolicy, PlainFunction, RegistryOptions, StepError, StepModule, step_module,
};
use test_helpers::logs::LogCapture;

fn with_jail<F>(f: F) -> Result<()>
where
    F: FnOnce(&mut figment::Jail) -> Result<()>,
{
    figment::Jail::try_with(|j| f(j).map_err(|err| figment::Error::from(err.to_string())))
        .map_err(|err| anyhow!(err))
}

fn register_twice(module: &StepModule) -> Result<(), StepError> {
    module
        .then("the article is visible")
        .decorate(PlainFunction::new("visible", |_| Ok(true)))?;
    module
        .then("the article is visible")
        .decorate(PlainFunction::new("shown", |_| Ok(true)))?;
    Ok(())
}

#[test]
fn environment_selects_the_duplicate_policy() -> Result<()> {
    with_jail(|j| {
        j.set_env("STEP_FIXTURES_DUPLICATES", "reject");
        let module = step_module!(RegistryOptions::from_env()?);
        ensure!(module.options().duplicates == DuplicatePolicy::Reject);
        match register_twice(&module) {
            Err(StepError::DuplicateStep { name, .. }) => {
                ensure!(name == "the article is visible");
                Ok(())
            }
            other => Err(anyhow!("expected duplicate rejection, got {other:?}")),
        }
    })
}

#[test]
fn overwrite_is_silent() -> Result<()> {
    let module = step_module!();
    let logs = LogCapture::new();
    logs.run(|| register_twice(&module))?;
    ensure!(
        !logs.contains("replacing existing binding"),
        "unexpected warning:\n{}",
        logs.contents()
    );
    ensure!(logs.contains("registered step"));
    Ok(())
}

#[test]
fn warn_policy_logs_the_replacement() -> Result<()> {
    let module = step_module!(RegistryOptions::default().with_duplicates(DuplicatePolicy::Warn));
    let logs = LogCapture::new();
    logs.run(|| register_twice(&module))?;
    let output = logs.contents();
    ensure!(output.contains("WARN"), "missing warning:\n{output}");
    ensure!(output.contains("replacing existing binding"), "output:\n{output}");
    ensure!(output.contains("the article is visible"), "output:\n{output}");
    Ok(())
}
