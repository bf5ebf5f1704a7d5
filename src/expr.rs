//! Conversion expression synthesis.
//!
//! Each direction emits a call to a runtime conversion entry point:
//!
//! | Direction                | General form                         |
//! |--------------------------|--------------------------------------|
//! | native variant → managed | `VariantUtils.ConvertTo<T>(expr)`    |
//! | managed → native variant | `VariantUtils.CreateFrom<T>(expr)`   |
//! | boxed variant → managed  | `expr.As<T>()`                       |
//! | managed → boxed variant  | `Variant.From<T>(expr)`              |
//!
//! Generic runtime collections skip the general form for dedicated calls
//! naming their type arguments directly; the general form is slower for them.
//! The input expression is an opaque source fragment and is never validated.

use std::fmt;

use godot_marshal_core::{MarshalKind, SynthesisError, TypeSymbol, names};

/// Direction of a synthesized conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprDirection {
    /// Native variant to managed value.
    NativeVariantToManaged,
    /// Managed value to native variant.
    ManagedToNativeVariant,
    /// Boxed variant to managed value.
    VariantToManaged,
    /// Managed value to boxed variant.
    ManagedToVariant,
}

impl ExprDirection {
    /// Every direction.
    pub const ALL: [ExprDirection; 4] = [
        ExprDirection::NativeVariantToManaged,
        ExprDirection::ManagedToNativeVariant,
        ExprDirection::VariantToManaged,
        ExprDirection::ManagedToVariant,
    ];
}

impl fmt::Display for ExprDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExprDirection::NativeVariantToManaged => "native variant to managed",
            ExprDirection::ManagedToNativeVariant => "managed to native variant",
            ExprDirection::VariantToManaged => "variant to managed",
            ExprDirection::ManagedToVariant => "managed to variant",
        };
        f.write_str(name)
    }
}

/// Synthesize a conversion expression for `direction`.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn synthesize<T: TypeSymbol>(
    direction: ExprDirection,
    kind: MarshalKind,
    ty: &T,
    input_expr: &str,
) -> Result<String, SynthesisError> {
    let mut out = String::new();
    match direction {
        ExprDirection::NativeVariantToManaged => {
            append_native_variant_to_managed_expr(&mut out, input_expr, ty, kind)?
        }
        ExprDirection::ManagedToNativeVariant => {
            append_managed_to_native_variant_expr(&mut out, input_expr, ty, kind)?
        }
        ExprDirection::VariantToManaged => {
            append_variant_to_managed_expr(&mut out, input_expr, ty, kind)?
        }
        ExprDirection::ManagedToVariant => {
            append_managed_to_variant_expr(&mut out, input_expr, ty, kind)?
        }
    }
    Ok(out)
}

/// Native variant to managed value.
pub fn native_variant_to_managed_expr<T: TypeSymbol>(
    input_expr: &str,
    ty: &T,
    kind: MarshalKind,
) -> Result<String, SynthesisError> {
    synthesize(ExprDirection::NativeVariantToManaged, kind, ty, input_expr)
}

/// Managed value to native variant.
pub fn managed_to_native_variant_expr<T: TypeSymbol>(
    input_expr: &str,
    ty: &T,
    kind: MarshalKind,
) -> Result<String, SynthesisError> {
    synthesize(ExprDirection::ManagedToNativeVariant, kind, ty, input_expr)
}

/// Boxed variant to managed value.
pub fn variant_to_managed_expr<T: TypeSymbol>(
    input_expr: &str,
    ty: &T,
    kind: MarshalKind,
) -> Result<String, SynthesisError> {
    synthesize(ExprDirection::VariantToManaged, kind, ty, input_expr)
}

/// Managed value to boxed variant.
pub fn managed_to_variant_expr<T: TypeSymbol>(
    input_expr: &str,
    ty: &T,
    kind: MarshalKind,
) -> Result<String, SynthesisError> {
    synthesize(ExprDirection::ManagedToVariant, kind, ty, input_expr)
}

/// Append `VariantUtils.ConvertTo*` for a native variant held in `input_expr`.
pub fn append_native_variant_to_managed_expr<T: TypeSymbol>(
    out: &mut String,
    input_expr: &str,
    ty: &T,
    kind: MarshalKind,
) -> Result<(), SynthesisError> {
    out.push_str(names::VARIANT_UTILS);
    match kind {
        MarshalKind::GodotGenericDictionary => {
            out.push_str(".ConvertToDictionaryObject");
            push_type_arguments(out, ty, kind)?;
        }
        MarshalKind::GodotGenericArray => {
            out.push_str(".ConvertToArrayObject");
            push_type_arguments(out, ty, kind)?;
        }
        _ => {
            out.push_str(".ConvertTo");
            push_generic(out, &ty.full_qualified_name());
        }
    }
    push_call(out, input_expr);
    Ok(())
}

/// Append `VariantUtils.CreateFrom*` for a managed value held in `input_expr`.
pub fn append_managed_to_native_variant_expr<T: TypeSymbol>(
    out: &mut String,
    input_expr: &str,
    ty: &T,
    kind: MarshalKind,
) -> Result<(), SynthesisError> {
    out.push_str(names::VARIANT_UTILS);
    match kind {
        MarshalKind::GodotGenericDictionary => {
            out.push_str(".CreateFromDictionary");
            push_type_arguments(out, ty, kind)?;
        }
        MarshalKind::GodotGenericArray => {
            out.push_str(".CreateFromArray");
            push_type_arguments(out, ty, kind)?;
        }
        _ => {
            out.push_str(".CreateFrom");
            push_generic(out, &ty.full_qualified_name());
        }
    }
    push_call(out, input_expr);
    Ok(())
}

/// Append a `Variant` instance conversion on the boxed variant `input_expr`.
pub fn append_variant_to_managed_expr<T: TypeSymbol>(
    out: &mut String,
    input_expr: &str,
    ty: &T,
    kind: MarshalKind,
) -> Result<(), SynthesisError> {
    out.push_str(input_expr);
    match kind {
        MarshalKind::GodotGenericDictionary => {
            out.push_str(".AsGodotDictionary");
            push_type_arguments(out, ty, kind)?;
        }
        MarshalKind::GodotGenericArray => {
            out.push_str(".AsGodotArray");
            push_type_arguments(out, ty, kind)?;
        }
        _ => {
            out.push_str(".As");
            push_generic(out, &ty.full_qualified_name());
        }
    }
    out.push_str("()");
    Ok(())
}

/// Append a static `Variant` factory call boxing the managed `input_expr`.
pub fn append_managed_to_variant_expr<T: TypeSymbol>(
    out: &mut String,
    input_expr: &str,
    ty: &T,
    kind: MarshalKind,
) -> Result<(), SynthesisError> {
    out.push_str(names::VARIANT);
    if kind.is_generic_collection() {
        out.push_str(".CreateFrom");
        push_type_arguments(out, ty, kind)?;
    } else {
        out.push_str(".From");
        push_generic(out, &ty.full_qualified_name());
    }
    push_call(out, input_expr);
    Ok(())
}

/// Push `<A, B>` naming the collection's type arguments, in declaration order.
fn push_type_arguments<T: TypeSymbol>(
    out: &mut String,
    ty: &T,
    kind: MarshalKind,
) -> Result<(), SynthesisError> {
    let args = ty.type_arguments();
    if args.len() > kind.generic_arity() {
        return Err(SynthesisError::TypeArgumentCount {
            kind,
            type_name: ty.full_qualified_name(),
            expected: kind.generic_arity(),
            found: args.len(),
        });
    }

    let mut arg_names = Vec::with_capacity(kind.generic_arity());
    for index in 0..kind.generic_arity() {
        let arg = args
            .get(index)
            .ok_or_else(|| SynthesisError::MissingTypeArgument {
                kind,
                type_name: ty.full_qualified_name(),
                index,
            })?;
        arg_names.push(arg.full_qualified_name());
    }
    push_generic(out, &arg_names.join(", "));
    Ok(())
}

fn push_generic(out: &mut String, args: &str) {
    out.push('<');
    out.push_str(args);
    out.push('>');
}

fn push_call(out: &mut String, input_expr: &str) {
    out.push('(');
    out.push_str(input_expr);
    out.push(')');
}

#[cfg(test)]
mod tests {
    use super::*;
    use godot_marshal_core::{HostType, SpecialType};
    use pretty_assertions::assert_eq;

    fn string_to_node_dictionary() -> HostType {
        HostType::godot_collection("Dictionary").with_type_arguments(vec![
            HostType::special(SpecialType::String),
            HostType::godot_class("Node"),
        ])
    }

    fn vector_array() -> HostType {
        HostType::godot_collection("Array")
            .with_type_arguments(vec![HostType::godot_struct("Vector2")])
    }

    #[test]
    fn general_native_conversions() {
        let ty = HostType::godot_struct("Vector3");
        assert_eq!(
            native_variant_to_managed_expr("args[0]", &ty, MarshalKind::Vector3).unwrap(),
            "global::Godot.NativeInterop.VariantUtils.ConvertTo<global::Godot.Vector3>(args[0])"
        );
        assert_eq!(
            managed_to_native_variant_expr("value", &ty, MarshalKind::Vector3).unwrap(),
            "global::Godot.NativeInterop.VariantUtils.CreateFrom<global::Godot.Vector3>(value)"
        );
    }

    #[test]
    fn general_boxed_conversions() {
        let ty = HostType::special(SpecialType::Int64);
        assert_eq!(
            variant_to_managed_expr("v", &ty, MarshalKind::Int64).unwrap(),
            "v.As<long>()"
        );
        assert_eq!(
            managed_to_variant_expr("x", &ty, MarshalKind::Int64).unwrap(),
            "global::Godot.Variant.From<long>(x)"
        );
    }

    #[test]
    fn generic_dictionary_fast_paths() {
        let ty = string_to_node_dictionary();
        let kind = MarshalKind::GodotGenericDictionary;
        assert_eq!(
            native_variant_to_managed_expr("arg", &ty, kind).unwrap(),
            "global::Godot.NativeInterop.VariantUtils.ConvertToDictionaryObject<string, global::Godot.Node>(arg)"
        );
        assert_eq!(
            managed_to_native_variant_expr("dict", &ty, kind).unwrap(),
            "global::Godot.NativeInterop.VariantUtils.CreateFromDictionary<string, global::Godot.Node>(dict)"
        );
        assert_eq!(
            variant_to_managed_expr("v", &ty, kind).unwrap(),
            "v.AsGodotDictionary<string, global::Godot.Node>()"
        );
        assert_eq!(
            managed_to_variant_expr("dict", &ty, kind).unwrap(),
            "global::Godot.Variant.CreateFrom<string, global::Godot.Node>(dict)"
        );
    }

    #[test]
    fn generic_array_fast_paths() {
        let ty = vector_array();
        let kind = MarshalKind::GodotGenericArray;
        assert_eq!(
            native_variant_to_managed_expr("arg", &ty, kind).unwrap(),
            "global::Godot.NativeInterop.VariantUtils.ConvertToArrayObject<global::Godot.Vector2>(arg)"
        );
        assert_eq!(
            managed_to_native_variant_expr("list", &ty, kind).unwrap(),
            "global::Godot.NativeInterop.VariantUtils.CreateFromArray<global::Godot.Vector2>(list)"
        );
        assert_eq!(
            variant_to_managed_expr("v", &ty, kind).unwrap(),
            "v.AsGodotArray<global::Godot.Vector2>()"
        );
        assert_eq!(
            managed_to_variant_expr("list", &ty, kind).unwrap(),
            "global::Godot.Variant.CreateFrom<global::Godot.Vector2>(list)"
        );
    }

    #[test]
    fn plain_collections_use_general_form() {
        let ty = HostType::godot_collection("Dictionary");
        assert_eq!(
            native_variant_to_managed_expr("arg", &ty, MarshalKind::GodotDictionary).unwrap(),
            "global::Godot.NativeInterop.VariantUtils.ConvertTo<global::Godot.Collections.Dictionary>(arg)"
        );
    }

    #[test]
    fn input_expression_is_opaque() {
        let ty = HostType::special(SpecialType::Boolean);
        assert_eq!(
            variant_to_managed_expr("(a ?? b).Field", &ty, MarshalKind::Boolean).unwrap(),
            "(a ?? b).Field.As<bool>()"
        );
    }

    #[test]
    fn missing_type_argument_reported() {
        let ty = HostType::godot_collection("Dictionary")
            .with_type_arguments(vec![HostType::special(SpecialType::Int32)]);
        let err = native_variant_to_managed_expr("arg", &ty, MarshalKind::GodotGenericDictionary)
            .unwrap_err();
        assert_eq!(
            err,
            SynthesisError::MissingTypeArgument {
                kind: MarshalKind::GodotGenericDictionary,
                type_name: "global::Godot.Collections.Dictionary<int>".to_string(),
                index: 1,
            }
        );
    }

    #[test]
    fn extra_type_arguments_reported() {
        let ty = HostType::godot_collection("Array").with_type_arguments(vec![
            HostType::special(SpecialType::Int32),
            HostType::special(SpecialType::String),
        ]);
        for direction in ExprDirection::ALL {
            let err = synthesize(direction, MarshalKind::GodotGenericArray, &ty, "arg").unwrap_err();
            assert_eq!(
                err,
                SynthesisError::TypeArgumentCount {
                    kind: MarshalKind::GodotGenericArray,
                    type_name: "global::Godot.Collections.Array<int, string>".to_string(),
                    expected: 1,
                    found: 2,
                }
            );
        }
    }

    #[test]
    fn append_extends_existing_buffer() {
        let ty = HostType::special(SpecialType::Single);
        let mut out = String::from("return ");
        append_managed_to_variant_expr(&mut out, "speed", &ty, MarshalKind::Single).unwrap();
        out.push(';');
        assert_eq!(out, "return global::Godot.Variant.From<float>(speed);");
    }

    #[test]
    fn every_direction_names_the_type() {
        let ty = HostType::godot_class("NodePath");
        for direction in ExprDirection::ALL {
            let expr = synthesize(direction, MarshalKind::NodePath, &ty, "p").unwrap();
            assert!(
                expr.contains("<global::Godot.NodePath>"),
                "{direction}: {expr}"
            );
        }
    }
}
