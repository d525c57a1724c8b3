//! The `Faker` entry point.

use std::path::{Path, PathBuf};

use crate::registry::{self, Member};
use crate::{FakeError, Kwargs, NativeValue};

/// Calls providers by name.
///
/// Providers are stateless apart from the directory that `*_file` providers
/// write into, so a single `Faker` can be shared across threads.
#[derive(Debug, Clone)]
pub struct Faker {
    file_root: PathBuf,
}

impl Faker {
    /// Create a faker that writes generated files under the system temp dir.
    pub fn new() -> Self {
        Self {
            file_root: std::env::temp_dir().join("fakegen"),
        }
    }

    /// Create a faker that writes generated files under `root`.
    pub fn with_file_root(root: impl Into<PathBuf>) -> Self {
        Self {
            file_root: root.into(),
        }
    }

    pub fn file_root(&self) -> &Path {
        &self.file_root
    }

    /// Call a provider by name.
    pub fn call(&self, name: &str, kwargs: &Kwargs) -> Result<NativeValue, FakeError> {
        let entry =
            registry::lookup(name).ok_or_else(|| FakeError::UnknownProvider(name.to_string()))?;
        match &entry.member {
            Member::Provider(spec) => spec.call(self, kwargs),
            Member::Value(_) => Err(FakeError::NotCallable {
                name: name.to_string(),
            }),
        }
    }
}

impl Default for Faker {
    fn default() -> Self {
        Self::new()
    }
}
