use std::{collections::HashSet, fmt};

use crate::{
    ast::{InputValue, Type},
    schema::{
        meta::{EnumMeta, InputObjectMeta, MetaType, ScalarMeta},
        model::SchemaType,
    },
};

#[derive(Debug)]
enum Path<'a> {
    Root,
    ArrayElement(usize, &'a Path<'a>),
    ObjectField(&'a str, &'a Path<'a>),
}

/// Checks that the literal `value` fits the input type `ty`.
///
/// Returns one message per mismatch, empty if the value fits. Types the
/// schema does not know are reported elsewhere and accept anything here.
pub(crate) fn unify_literal(value: &InputValue, ty: &Type, schema: &SchemaType) -> Vec<String> {
    let mut errors = vec![];
    unify_value(value, ty, schema, &Path::Root, &mut errors);
    errors
}

fn unify_value(
    value: &InputValue,
    ty: &Type,
    schema: &SchemaType,
    path: &Path<'_>,
    errors: &mut Vec<String>,
) {
    match ty {
        Type::NonNullNamed(_) | Type::NonNullList(_) => {
            if value.is_null() {
                errors.push(unification_error(path, format!(r#"Expected "{ty}", found null"#)));
            } else {
                unify_value(value, &ty.clone().nullable(), schema, path, errors);
            }
        }

        Type::List(inner) => match value {
            InputValue::Null => {}
            InputValue::List(l) => {
                for (i, v) in l.iter().enumerate() {
                    unify_value(v, inner, schema, &Path::ArrayElement(i, path), errors);
                }
            }
            _ => unify_value(value, inner, schema, path, errors),
        },

        Type::Named(name) => {
            if value.is_null() {
                return;
            }

            match schema.type_by_name(name) {
                Some(MetaType::Scalar(sm)) => unify_scalar(value, sm, schema, path, errors),
                Some(MetaType::Enum(em)) => unify_enum(value, em, path, errors),
                Some(MetaType::InputObject(iom)) => {
                    unify_input_object(value, iom, schema, path, errors);
                }
                Some(other) => errors.push(unification_error(
                    path,
                    format!(r#""{}" is not an input type"#, other.name()),
                )),
                None => {}
            }
        }
    }
}

fn unify_scalar(
    value: &InputValue,
    meta: &ScalarMeta,
    schema: &SchemaType,
    path: &Path<'_>,
    errors: &mut Vec<String>,
) {
    match value {
        InputValue::List(_) => {
            errors.push(unification_error(path, format!(r#"Expected "{}", found list"#, meta.name)));
        }
        InputValue::Object(_) => {
            errors.push(unification_error(path, format!(r#"Expected "{}", found object"#, meta.name)));
        }
        _ => {
            let Some(coercion) = schema.code_registry().scalar_coercion(&meta.name) else {
                return;
            };
            if let Err(e) = coercion.parse_literal(value) {
                errors.push(unification_error(
                    path,
                    format!("Expected input scalar `{}`. Got: `{value}`. Details: {e}", meta.name),
                ));
            }
        }
    }
}

fn unify_enum(value: &InputValue, meta: &EnumMeta, path: &Path<'_>, errors: &mut Vec<String>) {
    match value {
        InputValue::Enum(name) => {
            if !meta.values.iter().any(|ev| ev.name == name.as_str()) {
                errors.push(unification_error(
                    path,
                    format!(r#"Invalid value for enum "{}""#, meta.name),
                ));
            }
        }
        _ => errors.push(unification_error(
            path,
            format!(r#"Expected "{}", found not an enum value"#, meta.name),
        )),
    }
}

fn unify_input_object(
    value: &InputValue,
    meta: &InputObjectMeta,
    schema: &SchemaType,
    path: &Path<'_>,
    errors: &mut Vec<String>,
) {
    let InputValue::Object(obj) = value else {
        errors.push(unification_error(
            path,
            format!(r#"Expected "{}", found not an object"#, meta.name),
        ));
        return;
    };

    let mut keys = obj.keys().map(String::as_str).collect::<HashSet<_>>();

    for input_field in &meta.input_fields {
        keys.remove(input_field.name.as_str());
        let field_path = Path::ObjectField(&input_field.name, path);

        match obj.get(input_field.name.as_str()) {
            Some(v) if !v.is_null() => {
                unify_value(v, &input_field.arg_type, schema, &field_path, errors);
            }
            _ => {
                if input_field.arg_type.is_non_null() && input_field.default_value.is_none() {
                    errors.push(unification_error(
                        &field_path,
                        format!(r#"Expected "{}", found null"#, input_field.arg_type),
                    ));
                }
            }
        }
    }

    let mut unknown = keys.into_iter().collect::<Vec<_>>();
    unknown.sort_unstable();
    for key in unknown {
        errors.push(unification_error(&Path::ObjectField(key, path), "Unknown field"));
    }
}

fn unification_error(path: &Path<'_>, message: impl fmt::Display) -> String {
    format!("{path}{message}")
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Root => write!(f, ""),
            Self::ArrayElement(idx, prev) => write!(f, "{prev}In element #{idx}: "),
            Self::ObjectField(name, prev) => write!(f, r#"{prev}In field "{name}": "#),
        }
    }
}
