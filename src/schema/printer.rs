//! Schema language rendering of a frozen schema.

use std::fmt::Write as _;

use itertools::Itertools as _;

use crate::{
    ast::{InputValue, write_escaped},
    schema::{
        meta::{Argument, DeprecationStatus, EnumValue, Field, MetaType},
        model::{DirectiveApplication, DirectiveType, SchemaType},
    },
    util::is_multiline,
};

const INDENT: &str = "   ";

/// Options of [`print_schema`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PrintOptions {
    /// Also print built-in scalars, built-in directives and `__` prefixed
    /// types.
    pub include_internals: bool,
}

impl PrintOptions {
    /// Options printing internals as well.
    pub fn with_internals() -> Self {
        Self {
            include_internals: true,
        }
    }
}

/// Renders `schema` in schema language.
///
/// The `schema` block comes first, then directive definitions, then named
/// types in registration order. Definitions are separated by a blank line
/// and nested lines are indented by three spaces.
pub fn print_schema(schema: &SchemaType, options: &PrintOptions) -> String {
    let mut blocks = vec![print_schema_definition(schema)];

    blocks.extend(
        schema
            .directives()
            .filter(|d| options.include_internals || !d.is_builtin())
            .map(print_directive),
    );
    blocks.extend(
        schema
            .types()
            .filter(|t| options.include_internals || !t.is_builtin())
            .map(print_type),
    );

    blocks.join("\n\n")
}

fn print_schema_definition(schema: &SchemaType) -> String {
    let mut out = String::from("schema {\n");
    let _ = writeln!(out, "{INDENT}query: {}", schema.query_type_name);
    if let Some(name) = &schema.mutation_type_name {
        let _ = writeln!(out, "{INDENT}mutation: {name}");
    }
    if let Some(name) = &schema.subscription_type_name {
        let _ = writeln!(out, "{INDENT}subscription: {name}");
    }
    out.push('}');
    out
}

/// Renders one named type.
pub fn print_type(t: &MetaType) -> String {
    let mut out = print_description(t.description().map(|d| d.as_str()));
    match t {
        MetaType::Scalar(s) => {
            let _ = write!(out, "scalar {}", s.name);
        }
        MetaType::Object(o) => {
            let _ = write!(out, "type {}", o.name);
            print_implements(&mut out, &o.interface_names);
            for app in &o.directives {
                out.push(' ');
                out.push_str(&print_application(app));
            }
            out.push(' ');
            out.push_str(&print_block(o.fields.iter().filter(|f| !f.is_builtin()).map(print_field)));
        }
        MetaType::Interface(i) => {
            let _ = write!(out, "interface {}", i.name);
            print_implements(&mut out, &i.interface_names);
            out.push(' ');
            out.push_str(&print_block(i.fields.iter().filter(|f| !f.is_builtin()).map(print_field)));
        }
        MetaType::Union(u) => {
            let _ = write!(out, "union {} = {}", u.name, u.of_type_names.iter().join(" | "));
        }
        MetaType::Enum(e) => {
            let _ = write!(out, "enum {} ", e.name);
            out.push_str(&print_block(e.values.iter().map(print_enum_value)));
        }
        MetaType::InputObject(io) => {
            let _ = write!(out, "input {} ", io.name);
            out.push_str(&print_block(io.input_fields.iter().map(print_input_value)));
        }
    }
    out
}

fn print_directive(d: &DirectiveType) -> String {
    let mut out = print_description(d.description.as_deref());
    let _ = write!(out, "directive @{}", d.name);
    out.push_str(&print_arguments(&d.arguments));
    if d.is_repeatable {
        out.push_str(" repeatable");
    }
    let _ = write!(out, " on {}", d.locations.iter().join(" | "));
    out
}

fn print_implements(out: &mut String, interfaces: &[arcstr::ArcStr]) {
    if !interfaces.is_empty() {
        let _ = write!(out, " implements {}", interfaces.iter().join(" & "));
    }
}

fn print_field(f: &Field) -> String {
    let mut out = print_description(f.description.as_deref());
    out.push_str(&f.name);
    out.push_str(&print_arguments(f.arguments.as_deref().unwrap_or_default()));
    let _ = write!(out, ": {}", f.field_type);
    out.push_str(&print_deprecation(&f.deprecation_status));
    out
}

fn print_enum_value(v: &EnumValue) -> String {
    let mut out = print_description(v.description.as_deref());
    out.push_str(&v.name);
    out.push_str(&print_deprecation(&v.deprecation_status));
    out
}

fn print_input_value(a: &Argument) -> String {
    let mut out = print_description(a.description.as_deref());
    let _ = write!(out, "{}: {}", a.name, a.arg_type);
    if let Some(default) = &a.default_value {
        let _ = write!(out, " = {default}");
    }
    out
}

/// Arguments print inline, unless one of them has a description.
fn print_arguments(args: &[Argument]) -> String {
    let args = args.iter().filter(|a| !a.is_builtin()).collect::<Vec<_>>();
    if args.is_empty() {
        return String::new();
    }
    if args.iter().any(|a| a.description.is_some()) {
        let lines = args.iter().map(|a| indent(&print_input_value(a))).join("\n");
        format!("(\n{lines}\n)")
    } else {
        format!("({})", args.iter().map(|a| print_input_value(a)).join(", "))
    }
}

fn print_application(app: &DirectiveApplication) -> String {
    if app.arguments.is_empty() {
        format!("@{}", app.name)
    } else {
        let args = app
            .arguments
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .join(", ");
        format!("@{}({args})", app.name)
    }
}

fn print_deprecation(status: &DeprecationStatus) -> String {
    match status {
        DeprecationStatus::Current => String::new(),
        DeprecationStatus::Deprecated(None) => " @deprecated".into(),
        DeprecationStatus::Deprecated(Some(reason)) => {
            format!(" @deprecated(reason: {})", InputValue::scalar(reason.as_str()))
        }
    }
}

fn print_description(description: Option<&str>) -> String {
    let Some(description) = description else {
        return String::new();
    };
    let mut out = String::new();
    if is_multiline(description) {
        let _ = write!(out, "\"\"\"\n{}\n\"\"\"\n", description.replace(r#"""""#, r#"\""""#));
    } else {
        out.push('"');
        let _ = write_escaped(&mut out, description);
        out.push_str("\"\n");
    }
    out
}

fn print_block(lines: impl Iterator<Item = String>) -> String {
    let mut out = String::from("{\n");
    for line in lines {
        out.push_str(&indent(&line));
        out.push('\n');
    }
    out.push('}');
    out
}

fn indent(text: &str) -> String {
    text.lines().map(|l| format!("{INDENT}{l}")).join("\n")
}
