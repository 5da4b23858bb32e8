//! Implementation Registry
//!
//! Maps fully-qualified identifiers (`<namespace>.<TypeName>`) to
//! constructors. An identifier is read from configuration on every
//! resolution, split at its last `.`, and looked up namespace first.
//!
//! Only types registered here can be selected, and registering one requires
//! it to implement the role's trait, so conformance is checked at compile
//! time rather than discovered on first use.
//!
//! ```rust,ignore
//! let mut registry: Registry<dyn HttpClient> = Registry::new();
//! registry.register("http_client.mock.EchoHttpClient", || Box::new(EchoHttpClient));
//!
//! let client = registry.build(&ProcessEnvironment, HTTP_CLIENT_ENV)?;
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::Environment;
use crate::error::{Result, TickerError};

/// Zero-argument constructor for a `T`
pub type Factory<T> = Arc<dyn Fn() -> Box<T> + Send + Sync>;

/// Registry of constructors for one capability role
pub struct Registry<T: ?Sized> {
    namespaces: BTreeMap<String, BTreeMap<String, Factory<T>>>,
}

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            namespaces: self.namespaces.clone(),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("identifiers", &self.identifiers())
            .finish()
    }
}

impl<T: ?Sized> Registry<T> {
    pub const fn new() -> Self {
        Self {
            namespaces: BTreeMap::new(),
        }
    }

    /// Register a constructor under `identifier`
    ///
    /// A malformed identifier could never be resolved, so it is logged and
    /// skipped.
    pub fn register<F>(&mut self, identifier: &str, constructor: F)
    where
        F: Fn() -> Box<T> + Send + Sync + 'static,
    {
        let Ok((namespace, type_name)) = split_identifier(identifier) else {
            warn!(identifier, "ignoring malformed identifier");
            return;
        };

        self.namespaces
            .entry(namespace.to_string())
            .or_default()
            .insert(type_name.to_string(), Arc::new(constructor));
    }

    /// Whether `identifier` names a registered type
    pub fn contains(&self, identifier: &str) -> bool {
        self.lookup(identifier).is_ok()
    }

    /// All registered identifiers, sorted
    pub fn identifiers(&self) -> Vec<String> {
        self.namespaces
            .iter()
            .flat_map(|(namespace, types)| {
                types.keys().map(move |name| format!("{namespace}.{name}"))
            })
            .collect()
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.namespaces.values().map(BTreeMap::len).sum()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the identifier stored under `key` and return its constructor
    pub fn resolve(&self, env: &dyn Environment, key: &str) -> Result<Factory<T>> {
        let identifier = env
            .var(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| TickerError::Configuration { key: key.to_string() })?;

        debug!(key, %identifier, "resolving implementation");
        self.lookup(&identifier)
    }

    /// Resolve and construct a fresh instance
    pub fn build(&self, env: &dyn Environment, key: &str) -> Result<Box<T>> {
        let factory = self.resolve(env, key)?;
        Ok(factory())
    }

    fn lookup(&self, identifier: &str) -> Result<Factory<T>> {
        let (namespace, type_name) = split_identifier(identifier)?;

        let types = self.namespaces.get(namespace).ok_or_else(|| {
            TickerError::UnknownNamespace {
                identifier: identifier.to_string(),
                namespace: namespace.to_string(),
            }
        })?;

        types
            .get(type_name)
            .cloned()
            .ok_or_else(|| TickerError::UnknownType {
                identifier: identifier.to_string(),
                type_name: type_name.to_string(),
            })
    }
}

/// Split `<namespace>.<TypeName>` at the last dot
fn split_identifier(identifier: &str) -> Result<(&str, &str)> {
    match identifier.rsplit_once('.') {
        Some((namespace, type_name)) if !namespace.is_empty() && !type_name.is_empty() => {
            Ok((namespace, type_name))
        }
        _ => Err(TickerError::InvalidIdentifier(identifier.to_string())),
    }
}
