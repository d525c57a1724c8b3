//! Provider signatures.
//!
//! Parameter annotations are kept as structural type expressions so that
//! consumers can decide for themselves which shapes they are able to carry.

use serde_json::Value;
use std::fmt;

use crate::{FakeError, Faker, Kwargs, NativeValue};

/// A declared parameter type, in the vocabulary of Python annotations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeExpr {
    Int,
    Str,
    Float,
    Bool,
    /// The absence marker (`None`) as a union arm.
    NoneType,
    List(&'static TypeExpr),
    Tuple(&'static [TypeExpr]),
    Dict,
    /// Any class the consumer cannot know about (storage backends, tzinfo...).
    Opaque(&'static str),
    Union(&'static [TypeExpr]),
}

impl TypeExpr {
    /// `Optional[T]` spelled as the two-armed union it really is.
    pub const OPTIONAL_INT: TypeExpr = TypeExpr::Union(&[TypeExpr::Int, TypeExpr::NoneType]);
    pub const OPTIONAL_STR: TypeExpr = TypeExpr::Union(&[TypeExpr::Str, TypeExpr::NoneType]);
    pub const OPTIONAL_FLOAT: TypeExpr = TypeExpr::Union(&[TypeExpr::Float, TypeExpr::NoneType]);
    pub const OPTIONAL_BOOL: TypeExpr = TypeExpr::Union(&[TypeExpr::Bool, TypeExpr::NoneType]);
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Int => write!(f, "int"),
            TypeExpr::Str => write!(f, "str"),
            TypeExpr::Float => write!(f, "float"),
            TypeExpr::Bool => write!(f, "bool"),
            TypeExpr::NoneType => write!(f, "None"),
            TypeExpr::List(inner) => write!(f, "List[{}]", inner),
            TypeExpr::Tuple(items) => {
                write!(f, "Tuple[")?;
                write_joined(f, items)?;
                write!(f, "]")
            }
            TypeExpr::Dict => write!(f, "Dict"),
            TypeExpr::Opaque(name) => write!(f, "{}", name),
            TypeExpr::Union(arms) => {
                write!(f, "Union[")?;
                write_joined(f, arms)?;
                write!(f, "]")
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[TypeExpr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// How a parameter receives its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    PositionalOrKeyword,
    KeywordOnly,
    /// `*args`
    VarPositional,
    /// `**kwargs`
    VarKeyword,
}

impl ParamKind {
    pub fn is_variadic(self) -> bool {
        matches!(self, ParamKind::VarPositional | ParamKind::VarKeyword)
    }
}

/// A default value literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(&'static str),
    /// A default with no JSON form, kept as its source representation.
    Opaque(&'static str),
}

impl Literal {
    pub fn to_json(&self) -> Value {
        match self {
            Literal::None => Value::Null,
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Int(n) => Value::from(*n),
            Literal::Float(x) => serde_json::Number::from_f64(*x)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Literal::Str(s) => Value::String((*s).to_string()),
            Literal::Opaque(repr) => Value::String((*repr).to_string()),
        }
    }
}

/// One declared parameter of a provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    /// `None` when the parameter carries no annotation at all.
    pub annotation: Option<TypeExpr>,
    pub default: Option<Literal>,
}

impl ParamSpec {
    pub const fn required(name: &'static str, annotation: TypeExpr) -> Self {
        Self {
            name,
            kind: ParamKind::PositionalOrKeyword,
            annotation: Some(annotation),
            default: None,
        }
    }

    pub const fn optional(name: &'static str, annotation: TypeExpr, default: Literal) -> Self {
        Self {
            name,
            kind: ParamKind::PositionalOrKeyword,
            annotation: Some(annotation),
            default: Some(default),
        }
    }

    pub const fn untyped(name: &'static str, default: Option<Literal>) -> Self {
        Self {
            name,
            kind: ParamKind::PositionalOrKeyword,
            annotation: None,
            default,
        }
    }

    pub const fn var_args(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::VarPositional,
            annotation: None,
            default: None,
        }
    }

    pub const fn var_kwargs(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::VarKeyword,
            annotation: None,
            default: None,
        }
    }

    pub const fn keyword_only(mut self) -> Self {
        self.kind = ParamKind::KeywordOnly;
        self
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none() && !self.kind.is_variadic()
    }
}

/// Provider entry point.
pub type ProviderFn = fn(&Faker, &Kwargs) -> Result<NativeValue, FakeError>;

/// A callable provider and its declared signature.
#[derive(Clone, Copy)]
pub struct ProviderSpec {
    pub name: &'static str,
    pub params: &'static [ParamSpec],
    pub doc: Option<&'static str>,
    pub func: ProviderFn,
}

impl ProviderSpec {
    pub fn call(&self, faker: &Faker, kwargs: &Kwargs) -> Result<NativeValue, FakeError> {
        (self.func)(faker, kwargs)
    }

    /// Python-style rendering of the signature, e.g. `pyint(min_value: int = 0)`.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|p| {
                let prefix = match p.kind {
                    ParamKind::VarPositional => "*",
                    ParamKind::VarKeyword => "**",
                    _ => "",
                };
                let mut out = format!("{}{}", prefix, p.name);
                if let Some(ty) = p.annotation {
                    out.push_str(&format!(": {}", ty));
                }
                if let Some(default) = p.default {
                    out.push_str(&format!(" = {}", default.to_json()));
                }
                out
            })
            .collect();
        format!("{}({})", self.name, params.join(", "))
    }
}

impl fmt::Debug for ProviderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSpec")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_expr_display() {
        assert_eq!(TypeExpr::OPTIONAL_INT.to_string(), "Union[int, None]");
        assert_eq!(TypeExpr::List(&TypeExpr::Str).to_string(), "List[str]");
        assert_eq!(
            TypeExpr::Tuple(&[TypeExpr::Int, TypeExpr::Int]).to_string(),
            "Tuple[int, int]"
        );
    }

    #[test]
    fn test_literal_to_json() {
        assert_eq!(Literal::Int(3).to_json(), serde_json::json!(3));
        assert_eq!(Literal::None.to_json(), Value::Null);
        assert_eq!(Literal::Str("-7d").to_json(), serde_json::json!("-7d"));
        assert_eq!(Literal::Float(f64::NAN).to_json(), Value::Null);
    }

    #[test]
    fn test_required_excludes_variadic() {
        assert!(ParamSpec::required("max_value", TypeExpr::Int).is_required());
        assert!(!ParamSpec::var_kwargs("kwargs").is_required());
        assert!(!ParamSpec::optional("nb", TypeExpr::Int, Literal::Int(5)).is_required());
    }
}
