//! Steps exercising registration through a [`StepModule`].

use std::sync::Arc;

use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use step_fixtures::{
    FixtureLookupExt, PlainFunction, Request, StepError, StepKind, StepModule,
};
use test_helpers::blog::{Article, ArticleFactory, Author};

use crate::fixtures::RegistrationContext;

fn module(ctx: &RegistrationContext) -> Result<StepModule> {
    ctx.module
        .get()
        .ok_or_else(|| anyhow!("step module has not been created"))
}

fn article_function(ctx: &RegistrationContext, fixture: &str) -> Result<PlainFunction> {
    let factory = ctx
        .factory
        .get()
        .ok_or_else(|| anyhow!("article factory has not been created"))?;
    let title = match fixture {
        "article" => "Hello",
        "draft" => "Draft",
        other => return Err(anyhow!("no fixture called {other}")),
    };
    Ok(PlainFunction::new(fixture, move |_| {
        Ok(factory.create(title, Author::new("ada")))
    }))
}

fn resolve(request: &mut Request, name: &str) -> Result<Arc<Article>> {
    request
        .fixture::<Article>(name)
        .map_err(|err| anyhow!("resolving '{name}': {err}"))
}

#[given("an empty step module")]
fn empty_module(registration_context: &RegistrationContext) {
    registration_context
        .module
        .set(StepModule::new("behaviour::registration", file!()));
    registration_context.factory.set(ArticleFactory::new());
}

#[given("the module defines the article fixture")]
fn define_article(registration_context: &RegistrationContext) -> Result<()> {
    let func = article_function(registration_context, "article")?;
    module(registration_context)?.fixture(func)?;
    Ok(())
}

#[when("the given step \"{phrase}\" is registered for the {fixture} fixture")]
fn register_given(
    registration_context: &RegistrationContext,
    phrase: String,
    fixture: String,
) -> Result<()> {
    let func = article_function(registration_context, &fixture)?;
    module(registration_context)?.given(&phrase).decorate(func)?;
    Ok(())
}

#[when("the phrase \"{phrase}\" reuses the article fixture")]
fn register_alias(registration_context: &RegistrationContext, phrase: String) -> Result<()> {
    module(registration_context)?.alias(&phrase, "article")?;
    Ok(())
}

#[when("the alias for \"{phrase}\" decorates a function")]
fn decorate_alias(registration_context: &RegistrationContext, phrase: String) -> Result<()> {
    let sentinel = module(registration_context)?.alias(&phrase, "article")?;
    let func = article_function(registration_context, "article")?;
    match sentinel.decorate(func) {
        Err(err @ StepError::AliasUsedAsDecorator { .. }) => {
            registration_context.failure.set(err.to_string());
            Ok(())
        }
        other => Err(anyhow!("expected alias misuse, got {other:?}")),
    }
}

#[then("resolving \"{line}\" yields the article titled \"{title}\"")]
fn resolves_title(
    registration_context: &RegistrationContext,
    line: String,
    title: String,
) -> Result<()> {
    let mut request = Request::new(module(registration_context)?);
    let value = request
        .step(StepKind::Given, &line)
        .map_err(|err| anyhow!("resolving '{line}': {err}"))?;
    let article = value
        .downcast::<Article>()
        .ok_or_else(|| anyhow!("'{line}' did not yield an article"))?;
    ensure!(article.title == title, "expected {title}, got {}", article.title);
    Ok(())
}

#[then("\"{first}\" and \"{second}\" yield the same article")]
fn same_article(
    registration_context: &RegistrationContext,
    first: String,
    second: String,
) -> Result<()> {
    let mut request = Request::new(module(registration_context)?);
    let lhs = resolve(&mut request, &first)?;
    let rhs = resolve(&mut request, &second)?;
    ensure!(Arc::ptr_eq(&lhs, &rhs), "'{first}' and '{second}' differ");
    Ok(())
}

#[then("the registration fails because aliases cannot decorate")]
fn alias_failure(registration_context: &RegistrationContext) -> Result<()> {
    let message = registration_context
        .failure
        .take()
        .ok_or_else(|| anyhow!("no registration failure recorded"))?;
    ensure!(
        message.contains("cannot be used as a decorator"),
        "unexpected message: {message}"
    );
    Ok(())
}
