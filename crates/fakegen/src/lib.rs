//! fakegen - fake data providers with a static signature registry
//!
//! Every provider is described by a [`ProviderSpec`]: its name, its declared
//! parameters (with Python-style type annotations expressed as [`TypeExpr`]),
//! a docstring, and a plain function pointer. The full set lives in a sorted,
//! static [`registry`] so that callers can enumerate and introspect providers
//! without any runtime reflection.
//!
//! # Example
//!
//! ```rust,no_run
//! use fakegen::{Faker, Kwargs};
//!
//! let faker = Faker::new();
//! let name = faker.call("name", &Kwargs::new()).unwrap();
//! println!("{:?}", name);
//!
//! for entry in fakegen::registry() {
//!     println!("{}", entry.name);
//! }
//! ```

pub mod error;
pub mod faker;
pub mod kwargs;
pub mod providers;
pub mod registry;
pub mod signature;
pub mod value;

mod words;

pub use error::FakeError;
pub use faker::Faker;
pub use kwargs::Kwargs;
pub use registry::{registry, Member, RegistryEntry};
pub use signature::{Literal, ParamKind, ParamSpec, ProviderFn, ProviderSpec, TypeExpr};
pub use value::NativeValue;
