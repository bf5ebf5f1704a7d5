//! Driver-facing facade bundling the resolved registry with the
//! classification, tag and synthesis steps.

use godot_marshal_core::{MarshalKind, MarshalResult, TypeSymbol, VariantTag};
use godot_marshal_registry::{Compilation, TypeCache};

use crate::{ExprDirection, classify, synthesize, variant_tag};

/// Marshaling decisions for one compilation.
#[derive(Debug, Clone, Copy)]
pub struct Marshaler {
    cache: TypeCache,
}

/// What a supported type marshals as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarshalPlan {
    pub kind: MarshalKind,
    /// `None` when the kind is only representable through the generic
    /// array and dictionary conversions.
    pub variant_tag: Option<VariantTag>,
}

impl Marshaler {
    /// Resolve well-known types from `compilation`.
    pub fn new<C: Compilation>(compilation: &C) -> MarshalResult<Self> {
        let cache = TypeCache::new(compilation)?;
        Ok(Self { cache })
    }

    /// Well-known types resolved when this marshaler was built.
    pub const fn cache(&self) -> &TypeCache {
        &self.cache
    }

    /// Plan a member type, or `None` if it is unsupported.
    pub fn plan<T: TypeSymbol>(&self, ty: &T) -> Option<MarshalPlan> {
        let kind = classify(ty, &self.cache)?;
        Some(MarshalPlan {
            kind,
            variant_tag: variant_tag(kind),
        })
    }

    /// Synthesize the conversion for `ty` in `direction`.
    ///
    /// Returns `Ok(None)` for unsupported types; nothing is ever emitted for them.
    pub fn expr<T: TypeSymbol>(
        &self,
        direction: ExprDirection,
        ty: &T,
        input_expr: &str,
    ) -> MarshalResult<Option<String>> {
        let Some(plan) = self.plan(ty) else {
            return Ok(None);
        };
        let expr = synthesize(direction, plan.kind, ty, input_expr)?;
        Ok(Some(expr))
    }
}
