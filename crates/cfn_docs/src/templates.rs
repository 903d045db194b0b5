//! Built-in template sources.
//!
//! Both layouts bind `name`, `description`, `parameters`, `resources` and
//! `outputs`. The three sections are mappings from entry name to a record with
//! `Type`, `Default` and `Description` keys. `add_breaks` and `strip_newlines`
//! are available as functions.
//!
//! The built-in sources trim whitespace explicitly with `{%-`/`-%}` so the
//! environment can leave a user's base template untouched.

/// Block names the child layout fills in.
pub const BLOCK_NAMES: [&str; 4] = ["description", "parameters", "resources", "outputs"];

/// Registered name of [`STANDALONE_TEMPLATE`].
pub const STANDALONE_NAME: &str = "cfn-docs/standalone.md";

/// Registered name of [`CHILD_TEMPLATE`].
pub const CHILD_NAME: &str = "cfn-docs/child.md";

/// Self-contained page used when no base template is available.
pub const STANDALONE_TEMPLATE: &str = r#"## Description

{{ description }}

### Parameters

{% if parameters -%}
| Parameter        | Type   | Default   | Description |
|------------------|--------|-----------|-------------|
{%- for parameter, record in parameters|items %}
| {{ parameter }} | {{ record.Type }} | {% if record.Default %}{{ record.Default }}{% endif %} | {% if record.Description %}{{ strip_newlines(record.Description) }}{% endif %} |
{%- endfor %}
{% else -%}
*No parameters defined.*
{% endif %}
### Resources

{% if resources -%}
| Resource         | Type   |
|------------------|--------|
{%- for resource, record in resources|items %}
| {{ resource }} | {{ record.Type }} |
{%- endfor %}
{% else -%}
*No resources defined.*
{% endif %}
### Outputs

{% if outputs -%}
| Output           | Description   |
|------------------|---------------|
{%- for output, record in outputs|items %}
| {{ output }} | {% if record.Description %}{{ strip_newlines(record.Description) }}{% endif %} |
{%- endfor %}
{% else -%}
*No outputs defined.*
{% endif %}
"#;

/// Child layout that extends the base template named by `base_template`.
///
/// Only blocks the base template declares end up in the output.
pub const CHILD_TEMPLATE: &str = r#"{% extends base_template %}
{% block description -%}
## Description

{{ description }}
{%- endblock %}

{% block parameters -%}
### Parameters

{% if parameters -%}
The list of parameters for this template:

| Parameter        | Type   | Default   | Description |
|------------------|--------|-----------|-------------|
{%- for parameter, record in parameters|items %}
| {{ parameter }} | {{ record.Type }} | {% if record.Default %}{{ record.Default }}{% endif %} | {% if record.Description %}{{ strip_newlines(record.Description) }}{% endif %} |
{%- endfor %}
{% else -%}
*No parameters defined.*
{% endif %}
{%- endblock %}

{% block resources -%}
### Resources

{% if resources -%}
The list of resources this template creates:

| Resource         | Type   |
|------------------|--------|
{%- for resource, record in resources|items %}
| {{ resource }} | {{ record.Type }} |
{%- endfor %}
{% else -%}
*No resources defined.*
{% endif %}
{%- endblock %}

{% block outputs -%}
### Outputs

{% if outputs -%}
| Output           | Description   |
|------------------|---------------|
{%- for output, record in outputs|items %}
| {{ output }} | {% if record.Description %}{{ strip_newlines(record.Description) }}{% endif %} |
{%- endfor %}
{% else -%}
*No outputs defined.*
{% endif %}
{%- endblock %}
"#;

/// Base template written by `cfn-docs init-base`.
pub const STARTER_TEMPLATE: &str = r#"{# Section blocks are filled in by cfn-docs. -#}
# {{ name }}

{% block description %}{% endblock %}

{% block parameters %}{% endblock %}
{% block resources %}{% endblock %}
{% block outputs %}{% endblock %}
"#;
