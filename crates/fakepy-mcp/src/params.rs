//! Parameter filtering.

use fakegen::ParamSpec;

use crate::classify::is_wire_safe;

/// Keep the parameters a JSON-RPC client can actually supply, in declared
/// order.
///
/// Dropped: `*args` and `**kwargs` collectors, anything named `options`
/// (any case), unannotated parameters, and parameters whose type is not
/// wire-safe. An empty result is normal.
pub fn filter_params(params: &[ParamSpec]) -> Vec<ParamSpec> {
    params
        .iter()
        .filter(|param| !param.kind.is_variadic())
        .filter(|param| !param.name.eq_ignore_ascii_case("options"))
        .filter(|param| param.annotation.as_ref().is_some_and(is_wire_safe))
        .copied()
        .collect()
}
