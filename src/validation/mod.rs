//! Checks run while freezing a schema.
//!
//! Declarations are only validated once every type is known, so forward
//! references and mutually recursive types need no special care from the
//! caller.

mod input_value;

use arcstr::ArcStr;

use crate::{
    ast::{InputValue, Type},
    builder::{BuildError, BuildResult, context::TypeReference},
    schema::{
        meta::{Argument, Field, MetaType},
        model::{DirectiveApplication, DirectiveLocation, SchemaType},
    },
};

pub(crate) use self::input_value::unify_literal;

/// Validates a fully assembled `schema`.
///
/// `references` are the type references recorded while building, checked for
/// resolution first so that later checks may assume every name is known.
pub(crate) fn validate_schema(schema: &SchemaType, references: &[TypeReference]) -> BuildResult<()> {
    for r in references {
        if schema.type_by_name(&r.name).is_none() {
            return Err(BuildError::UnresolvedTypeReference {
                name: r.name.clone(),
                referrer: r.referrer.clone(),
            });
        }
    }

    for t in schema.types() {
        match t {
            MetaType::Object(o) => {
                validate_fields(schema, &o.name, &o.fields)?;
                validate_implements(schema, &o.name, &o.interface_names)?;
                for app in &o.directives {
                    validate_application(schema, app, DirectiveLocation::Object, &o.name)?;
                }
            }
            MetaType::Interface(i) => {
                validate_fields(schema, &i.name, &i.fields)?;
                validate_implements(schema, &i.name, &i.interface_names)?;
            }
            MetaType::Union(u) => {
                for member in &u.of_type_names {
                    match schema.type_by_name(member) {
                        None => {
                            return Err(BuildError::UnresolvedTypeReference {
                                name: member.clone(),
                                referrer: u.name.to_string(),
                            });
                        }
                        Some(MetaType::Object(_)) => {}
                        Some(_) => {
                            return Err(BuildError::NotAnObjectType {
                                name: member.clone(),
                                role: format!("a member of the union '{}'", u.name),
                            });
                        }
                    }
                }
            }
            MetaType::InputObject(io) => {
                for f in &io.input_fields {
                    validate_argument(schema, &format!("{}.{}", io.name, f.name), f)?;
                }
            }
            MetaType::Scalar(_) | MetaType::Enum(_) => {}
        }
    }

    for d in schema.directives() {
        for a in &d.arguments {
            validate_argument(schema, &format!("@{}({})", d.name, a.name), a)?;
        }
    }

    schema.types().try_for_each(check_not_empty)
}

/// Types without members have no representation in schema language.
fn check_not_empty(t: &MetaType) -> BuildResult<()> {
    let (member, empty) = match t {
        MetaType::Object(o) => ("field", o.fields.iter().all(Field::is_builtin)),
        MetaType::Interface(i) => ("field", i.fields.iter().all(Field::is_builtin)),
        MetaType::InputObject(io) => ("field", io.input_fields.iter().all(Argument::is_builtin)),
        MetaType::Enum(e) => ("value", e.values.is_empty()),
        MetaType::Scalar(_) | MetaType::Union(_) => return Ok(()),
    };
    if empty {
        return Err(BuildError::EmptyType {
            kind: t.type_kind(),
            name: t.name().clone(),
            member,
        });
    }
    Ok(())
}

fn validate_fields(schema: &SchemaType, owner: &str, fields: &[Field]) -> BuildResult<()> {
    for f in fields {
        let referrer = format!("{owner}.{}", f.name);
        check_position(schema, &f.field_type, &referrer, false)?;
        for a in f.arguments.as_deref().unwrap_or_default() {
            validate_argument(schema, &format!("{referrer}({})", a.name), a)?;
        }
    }
    Ok(())
}

fn validate_argument(schema: &SchemaType, owner: &str, arg: &Argument) -> BuildResult<()> {
    check_position(schema, &arg.arg_type, owner, true)?;

    if let Some(default) = &arg.default_value {
        if let Some(reason) = unify_literal(default, &arg.arg_type, schema).into_iter().next() {
            return Err(BuildError::DefaultValueType {
                owner: owner.into(),
                expected: arg.arg_type.to_string(),
                value: default.to_string(),
                reason,
            });
        }
    }
    Ok(())
}

fn validate_implements(schema: &SchemaType, implementor: &str, names: &[ArcStr]) -> BuildResult<()> {
    for name in names {
        match schema.type_by_name(name) {
            None => {
                return Err(BuildError::UnresolvedTypeReference {
                    name: name.clone(),
                    referrer: implementor.into(),
                });
            }
            Some(MetaType::Interface(_)) => {}
            Some(_) => {
                return Err(BuildError::NotAnInterfaceType {
                    name: name.clone(),
                    implementor: implementor.into(),
                });
            }
        }
    }
    Ok(())
}

fn check_position(schema: &SchemaType, ty: &Type, referrer: &str, input: bool) -> BuildResult<()> {
    let name = ty.innermost_name();
    let Some(meta) = schema.type_by_name(name) else {
        return Err(BuildError::UnresolvedTypeReference {
            name: name.clone(),
            referrer: referrer.into(),
        });
    };
    let fits = if input { meta.is_input() } else { meta.is_output() };
    if fits {
        Ok(())
    } else {
        Err(BuildError::InvalidTypePosition {
            name: name.clone(),
            referrer: referrer.into(),
            expected: if input { "input" } else { "output" },
        })
    }
}

fn validate_application(
    schema: &SchemaType,
    app: &DirectiveApplication,
    location: DirectiveLocation,
    referrer: &ArcStr,
) -> BuildResult<()> {
    let Some(directive) = schema.directive_by_name(&app.name) else {
        return Err(BuildError::UnknownDirective {
            name: app.name.clone(),
            referrer: referrer.clone(),
        });
    };
    if !directive.allows(location) {
        return Err(BuildError::MisplacedDirective {
            directive: app.name.clone(),
            location,
            referrer: referrer.clone(),
        });
    }

    for arg in &directive.arguments {
        let value = app.argument(&arg.name).unwrap_or(&InputValue::Null);
        if value.is_null() && arg.default_value.is_some() {
            continue;
        }
        if let Some(reason) = unify_literal(value, &arg.arg_type, schema).into_iter().next() {
            return Err(BuildError::ArgumentValueType {
                owner: format!("@{}({}) on {referrer}", app.name, arg.name),
                expected: arg.arg_type.to_string(),
                value: value.to_string(),
                reason,
            });
        }
    }
    Ok(())
}
