//! Markdown rendering with minijinja.

use std::path::Path;

use minijinja::{path_loader, AutoEscape, Environment};
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::{DocsError, DocsResult};
use crate::format::{add_breaks, strip_newlines};
use crate::model::DocContext;
use crate::templates::{CHILD_NAME, CHILD_TEMPLATE, STANDALONE_NAME, STANDALONE_TEMPLATE};

/// Values bound while rendering either layout.
#[derive(Debug, Serialize)]
struct TemplateContext<'a> {
    name: &'a str,
    description: &'a str,
    parameters: Mapping,
    resources: Mapping,
    outputs: Mapping,
    base_template: Option<&'a str>,
}

impl<'a> TemplateContext<'a> {
    fn new(ctx: &'a DocContext, base_template: Option<&'a str>) -> Self {
        Self {
            name: &ctx.name,
            description: &ctx.description,
            parameters: ctx
                .parameters
                .iter()
                .map(|p| {
                    let record = record([
                        ("Type", Some(&p.param_type)),
                        ("Default", p.default.as_ref()),
                        ("Description", p.description.as_ref()),
                    ]);
                    (Value::from(p.name.clone()), record)
                })
                .collect(),
            resources: ctx
                .resources
                .iter()
                .map(|r| {
                    let record = record([("Type", Some(&r.resource_type))]);
                    (Value::from(r.name.clone()), record)
                })
                .collect(),
            outputs: ctx
                .outputs
                .iter()
                .map(|o| {
                    let record = record([("Description", o.description.as_ref())]);
                    (Value::from(o.name.clone()), record)
                })
                .collect(),
            base_template,
        }
    }
}

fn record<const N: usize>(fields: [(&str, Option<&String>); N]) -> Value {
    Value::Mapping(
        fields
            .into_iter()
            .filter_map(|(key, value)| {
                value.map(|v| (Value::from(key), Value::from(v.clone())))
            })
            .collect(),
    )
}

/// Environment holding the built-in layouts and the text helpers.
fn environment() -> DocsResult<Environment<'static>> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_function("add_breaks", |text: String| add_breaks(&text));
    env.add_function("strip_newlines", |text: String| strip_newlines(&text));
    env.add_template(STANDALONE_NAME, STANDALONE_TEMPLATE)?;
    env.add_template(CHILD_NAME, CHILD_TEMPLATE)?;
    Ok(env)
}

/// Render the self-contained layout.
pub fn render_standalone(ctx: &DocContext) -> DocsResult<String> {
    let env = environment()?;
    let rendered = env
        .get_template(STANDALONE_NAME)?
        .render(TemplateContext::new(ctx, None))?;
    Ok(rendered)
}

/// Render the child layout on top of `base_template` loaded from `dir`.
///
/// Any template error is reported against the base template path.
pub fn render_composed(ctx: &DocContext, dir: &Path, base_template: &str) -> DocsResult<String> {
    let mut env = environment()?;
    env.set_loader(path_loader(dir));
    debug!("Extending {} from {:?}", base_template, dir);

    env.get_template(CHILD_NAME)
        .and_then(|child| child.render(TemplateContext::new(ctx, Some(base_template))))
        .map_err(|e| DocsError::MalformedBaseTemplate {
            path: dir.join(base_template),
            message: e.to_string(),
        })
}
