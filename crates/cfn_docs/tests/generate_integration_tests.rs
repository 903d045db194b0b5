//! Integration tests for documentation generation.

use std::fs;
use std::path::Path;

use cfn_docs::{generate, DocGenerator, DocsError, RenderMode};
use serde_yaml::Mapping;
use tempfile::tempdir;

const BASE_TEMPLATE: &str = r#"# {{ name }}

Maintained by the platform team.

{% block description %}{% endblock %}

{% block parameters %}{% endblock %}

{% block resources %}{% endblock %}

{% block outputs %}{% endblock %}

---
Generated documentation. Do not edit by hand.
"#;

fn template(yaml: &str) -> Mapping {
    serde_yaml::from_str(yaml).unwrap()
}

fn sample() -> Mapping {
    template(
        r#"
Description: Shared network stack
Parameters:
  Env:
    Type: String
    Default: prod
    Description: "line1\nline2"
  VpcCidr:
    Type: String
Resources:
  Vpc:
    Type: AWS::EC2::VPC
  Subnet:
    Type: AWS::EC2::Subnet
Outputs:
  VpcId:
    Description: "Id of the\nVPC"
    Value: !Ref Vpc
"#,
    )
}

/// Without a README.jinja the built-in layout is used.
#[test]
fn test_standalone_fallback_without_base_template() {
    let temp = tempdir().unwrap();
    let out = generate(&sample(), "network", Some(temp.path())).unwrap();

    for heading in ["## Description", "### Parameters", "### Resources", "### Outputs"] {
        assert!(out.contains(heading), "missing heading {heading}");
    }
    assert!(out.contains("Shared network stack"));
    assert!(!out.contains("The list of parameters"));
}

#[test]
fn test_standalone_fallback_for_missing_directory() {
    let out = generate(&sample(), "network", Some(Path::new("/definitely/not/here"))).unwrap();
    assert!(out.starts_with("## Description"));
}

#[test]
fn test_parameter_row_collapses_newlines() {
    let out = generate(&sample(), "network", None).unwrap();
    assert!(out.contains("| Env | String | prod | line1 line2 |"));
    assert!(out.contains("| VpcCidr | String |  |  |"));
    assert!(out.contains("| VpcId | Id of the VPC |"));
}

#[test]
fn test_rows_follow_declaration_order() {
    let out = generate(&sample(), "network", None).unwrap();
    let vpc = out.find("| Vpc | AWS::EC2::VPC |").unwrap();
    let subnet = out.find("| Subnet | AWS::EC2::Subnet |").unwrap();
    assert!(vpc < subnet);
}

#[test]
fn test_empty_sections() {
    let out = generate(&template("Resources: {}\n"), "empty", None).unwrap();
    assert!(out.contains("No Template description set"));
    assert!(out.contains("*No parameters defined.*"));
    assert!(out.contains("*No resources defined.*"));
    assert!(out.contains("*No outputs defined.*"));
}

#[test]
fn test_lowercase_keys_render_the_same() {
    let upper = template("Description: d\nResources:\n  A:\n    Type: T\n");
    let lower = template("description: d\nresources:\n  A:\n    Type: T\n");
    assert_eq!(
        generate(&upper, "x", None).unwrap(),
        generate(&lower, "x", None).unwrap()
    );
}

/// A README.jinja with the four blocks wraps the sections in its boilerplate.
#[test]
fn test_composed_with_base_template() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("README.jinja"), BASE_TEMPLATE).unwrap();

    let out = generate(&sample(), "network", Some(temp.path())).unwrap();

    assert!(out.starts_with("# network\n\nMaintained by the platform team.\n\n## Description"));
    assert!(out.contains("The list of parameters for this template:"));
    assert!(out.contains("The list of resources this template creates:"));
    assert!(out.contains("| Env | String | prod | line1 line2 |"));
    assert!(out.contains("| VpcId | Id of the VPC |"));
    assert!(out.trim_end().ends_with("Generated documentation. Do not edit by hand."));
}

/// Base templates are full Jinja: conditionals and filters around the blocks
/// still compose.
#[test]
fn test_base_template_with_conditionals_and_filters() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("README.jinja"),
        "# {{ name }}\n\n\
         {% if description %}Maintained by the platform team.{% endif %}\n\n\
         Stack id: {{ name | upper }}\n\n\
         {% block description %}{% endblock %}\n",
    )
    .unwrap();

    let rendered = DocGenerator::new()
        .with_base_template_dir(Some(temp.path()))
        .render(&sample(), "net")
        .unwrap();

    assert!(matches!(rendered.mode, RenderMode::Composed { .. }));
    assert!(rendered
        .markdown
        .starts_with("# net\n\nMaintained by the platform team.\n\nStack id: NET\n\n## Description"));
    assert!(rendered.markdown.contains("Shared network stack"));
}

#[test]
fn test_output_without_description_has_blank_cell() {
    let out = generate(
        &template("Outputs:\n  Arn:\n    Value: !GetAtt Bucket.Arn\n"),
        "bucket",
        None,
    )
    .unwrap();
    assert!(out.contains("| Arn |  |\n"));
}

/// The resources section only appears when the base template places it.
#[test]
fn test_resources_visibility_controlled_by_base_template() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("README.jinja"),
        "{% block description %}{% endblock %}\n{% block outputs %}{% endblock %}\n",
    )
    .unwrap();

    let out = generate(&sample(), "network", Some(temp.path())).unwrap();
    assert!(out.contains("## Description"));
    assert!(out.contains("### Outputs"));
    assert!(!out.contains("### Resources"));
}

#[test]
fn test_malformed_base_template_falls_back() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("README.jinja"),
        "{% extends 'layout.md' %}{% block description %}",
    )
    .unwrap();

    let rendered = DocGenerator::new()
        .with_base_template_dir(Some(temp.path()))
        .render(&sample(), "network")
        .unwrap();

    assert!(matches!(rendered.mode, RenderMode::Standalone { reason: Some(_) }));
    assert!(rendered.markdown.starts_with("## Description"));
}

/// A malformed template payload fails on both paths and reaches the caller.
#[test]
fn test_malformed_template_propagates() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("README.jinja"), BASE_TEMPLATE).unwrap();
    let bad = template("Parameters:\n  Env:\n    Default: prod\n");

    let composed = generate(&bad, "bad", Some(temp.path())).unwrap_err();
    assert!(matches!(composed, DocsError::MalformedTemplate { .. }));

    let standalone = generate(&bad, "bad", None).unwrap_err();
    assert!(matches!(standalone, DocsError::MalformedTemplate { .. }));
}

#[test]
fn test_generate_is_idempotent() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("README.jinja"), BASE_TEMPLATE).unwrap();

    let first = generate(&sample(), "network", Some(temp.path())).unwrap();
    let second = generate(&sample(), "network", Some(temp.path())).unwrap();
    assert_eq!(first, second);

    let first = generate(&sample(), "network", None).unwrap();
    let second = generate(&sample(), "network", None).unwrap();
    assert_eq!(first, second);
}
