//! Typed view of the template fields that end up in the documentation.

use serde_yaml::{Mapping, Value};

use crate::error::{DocsError, DocsResult};
use crate::extract::{
    get_description, get_outputs, get_parameters, get_resources, is_empty, scalar_text,
};

/// One row of the parameters table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRow {
    pub name: String,
    pub param_type: String,
    pub default: Option<String>,
    pub description: Option<String>,
}

/// One row of the resources table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRow {
    pub name: String,
    pub resource_type: String,
}

/// One row of the outputs table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub name: String,
    pub description: Option<String>,
}

/// Everything a layout needs to render one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocContext {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterRow>,
    pub resources: Vec<ResourceRow>,
    pub outputs: Vec<OutputRow>,
}

impl DocContext {
    /// Extract and type-check the documented fields of `template`.
    ///
    /// Fails when a section or record does not have the expected shape.
    pub fn from_template(template: &Mapping, name: impl Into<String>) -> DocsResult<Self> {
        let parameters = records(&get_parameters(template), "Parameters")?
            .into_iter()
            .map(|(name, record)| -> DocsResult<ParameterRow> {
                Ok(ParameterRow {
                    param_type: required_text(record, "Type", "Parameters", &name)?,
                    default: default_text(record, &name)?,
                    description: optional_text(record, "Description", "Parameters", &name)?,
                    name,
                })
            })
            .collect::<DocsResult<Vec<_>>>()?;

        let resources = records(&get_resources(template), "Resources")?
            .into_iter()
            .map(|(name, record)| -> DocsResult<ResourceRow> {
                Ok(ResourceRow {
                    resource_type: required_text(record, "Type", "Resources", &name)?,
                    name,
                })
            })
            .collect::<DocsResult<Vec<_>>>()?;

        let outputs = records(&get_outputs(template), "Outputs")?
            .into_iter()
            .map(|(name, record)| -> DocsResult<OutputRow> {
                Ok(OutputRow {
                    description: optional_text(record, "Description", "Outputs", &name)?,
                    name,
                })
            })
            .collect::<DocsResult<Vec<_>>>()?;

        Ok(Self {
            name: name.into(),
            description: get_description(template),
            parameters,
            resources,
            outputs,
        })
    }
}

/// Split a section into `(name, record)` pairs, keeping declaration order.
fn records<'a>(section: &'a Value, label: &str) -> DocsResult<Vec<(String, &'a Mapping)>> {
    let map = section.as_mapping().ok_or_else(|| {
        DocsError::malformed(label, "expected a mapping of names to records")
    })?;

    map.iter()
        .map(|(key, value)| -> DocsResult<(String, &'a Mapping)> {
            let name = scalar_text(key)
                .ok_or_else(|| DocsError::malformed(label, format!("invalid entry name {key:?}")))?;
            let record = value.as_mapping().ok_or_else(|| {
                DocsError::malformed(label, format!("{name} is not a mapping"))
            })?;
            Ok((name, record))
        })
        .collect()
}

fn required_text(record: &Mapping, field: &str, label: &str, name: &str) -> DocsResult<String> {
    optional_text(record, field, label, name)?
        .ok_or_else(|| DocsError::malformed(label, format!("{name} is missing {field}")))
}

fn optional_text(
    record: &Mapping,
    field: &str,
    label: &str,
    name: &str,
) -> DocsResult<Option<String>> {
    match record.get(field) {
        None => Ok(None),
        Some(value) if is_empty(value) => Ok(None),
        Some(value) => scalar_text(value)
            .map(Some)
            .ok_or_else(|| DocsError::malformed(label, format!("{name}.{field} must be a string"))),
    }
}

/// Defaults may be scalars or, for list parameters, a sequence of scalars.
fn default_text(record: &Mapping, name: &str) -> DocsResult<Option<String>> {
    match record.get("Default") {
        None => Ok(None),
        Some(value) if is_empty(value) => Ok(None),
        Some(Value::Sequence(items)) => items
            .iter()
            .map(|item| {
                scalar_text(item).ok_or_else(|| {
                    DocsError::malformed("Parameters", format!("{name}.Default has a non-scalar item"))
                })
            })
            .collect::<DocsResult<Vec<_>>>()
            .map(|items| Some(items.join(","))),
        Some(value) => scalar_text(value).map(Some).ok_or_else(|| {
            DocsError::malformed("Parameters", format!("{name}.Default must be a scalar"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_context_from_template() {
        let template = parse(
            r#"
Description: Demo
Parameters:
  Env:
    Type: String
    Default: prod
    Description: "line1\nline2"
  Count:
    Type: Number
    Default: 3
Resources:
  Bucket:
    Type: AWS::S3::Bucket
Outputs:
  BucketName:
    Description: Name of the bucket
    Value: !Ref Bucket
"#,
        );

        let ctx = DocContext::from_template(&template, "demo").unwrap();
        assert_eq!(ctx.name, "demo");
        assert_eq!(ctx.description, "Demo");
        assert_eq!(ctx.parameters.len(), 2);
        assert_eq!(ctx.parameters[0].name, "Env");
        assert_eq!(ctx.parameters[0].default.as_deref(), Some("prod"));
        assert_eq!(ctx.parameters[0].description.as_deref(), Some("line1\nline2"));
        assert_eq!(ctx.parameters[1].default.as_deref(), Some("3"));
        assert_eq!(ctx.parameters[1].description, None);
        assert_eq!(ctx.resources[0].resource_type, "AWS::S3::Bucket");
        assert_eq!(ctx.outputs[0].description.as_deref(), Some("Name of the bucket"));
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let template = parse(
            "Resources:\n  Zeta:\n    Type: A\n  Alpha:\n    Type: B\n  Mid:\n    Type: C\n",
        );
        let ctx = DocContext::from_template(&template, "order").unwrap();
        let names: Vec<_> = ctx.resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_list_default_is_joined() {
        let template = parse("Parameters:\n  Azs:\n    Type: CommaDelimitedList\n    Default: [a, b]\n");
        let ctx = DocContext::from_template(&template, "list").unwrap();
        assert_eq!(ctx.parameters[0].default.as_deref(), Some("a,b"));
    }

    #[test]
    fn test_missing_type_is_malformed() {
        let template = parse("Resources:\n  Bucket:\n    Properties: {}\n");
        let err = DocContext::from_template(&template, "bad").unwrap_err();
        assert!(err.is_template_error());
        assert!(err.to_string().contains("Bucket is missing Type"));
    }

    #[test]
    fn test_non_mapping_section_is_malformed() {
        let template = parse("Parameters:\n  - Env\n");
        assert!(DocContext::from_template(&template, "bad").is_err());
    }

    #[test]
    fn test_non_string_description_is_malformed() {
        let template = parse("Outputs:\n  Out:\n    Description:\n      nested: true\n");
        assert!(DocContext::from_template(&template, "bad").is_err());
    }
}
