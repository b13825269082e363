// src/registry/mod.rs
//
// responsibilities:
//  * static HandlerClass/RouteSpec/ParamSpec descriptors (the marker surface)
//  * Registry: one singleton per handler class + the path -> RouteEntry table

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

mod binder;
pub use binder::bind;

/// One instantiated handler group. Constructed once at registration, owned
/// by the registry for the process lifetime, shared by its route entries.
pub type Instance = Arc<dyn Any + Send + Sync>;

/// A routed operation: invoked on the handler singleton with one slot per
/// declared parameter (`None` = unset). Concrete handlers provide a shim
/// that downcasts the instance and forwards to the real method.
pub type OperationFn = fn(&(dyn Any + Send + Sync), &[Option<String>]) -> Result<String, InvokeError>;

/// The parameter-level binding marker. `Query` declares which query value an
/// argument position receives; a missing `default` is distinct from a
/// declared empty default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamSpec {
    Query {
        name: &'static str,
        default: Option<&'static str>,
    },
    Unbound,
}

/// The method-level route marker: one GET path mapped to one operation.
pub struct RouteSpec {
    pub path: &'static str,
    pub params: &'static [ParamSpec],
    pub operation: OperationFn,
}

/// The class-level descriptor for one handler type. `handler_marker` mirrors
/// the presence of the class-level annotation; classes without it cannot be
/// registered.
pub struct HandlerClass {
    pub name: &'static str,
    pub handler_marker: bool,
    pub construct: fn() -> Instance,
    pub routes: &'static [RouteSpec],
}

/// The statically-built list of handler classes that name-based registration
/// and namespace scanning resolve against.
pub type Catalog = &'static [HandlerClass];

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("missing handler marker: {0}")]
    MissingMarker(&'static str),
    #[error("type not found: {0}")]
    TypeNotFound(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvokeError {
    #[error("handler instance type mismatch")]
    TypeMismatch,
    #[error("missing argument at position {0}")]
    MissingArgument(usize),
}

pub(crate) struct RouteEntry {
    pub handler: Instance,
    pub operation: OperationFn,
    pub params: &'static [ParamSpec],
}

/// Route table plus handler singletons. Mutated only during the registration
/// phase; serving moves it behind an `Arc` and treats it as read-only.
pub struct Registry {
    catalog: Catalog,
    routes: HashMap<String, RouteEntry>,
}

impl Registry {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            routes: HashMap::new(),
        }
    }

    /// Registers one handler class: checks the class-level marker,
    /// constructs the singleton, and inserts one route entry per route
    /// marker. A path collision silently replaces the prior entry; the
    /// most recent registration wins.
    pub fn register(&mut self, class: &HandlerClass) -> Result<(), ConfigError> {
        if !class.handler_marker {
            return Err(ConfigError::MissingMarker(class.name));
        }

        let instance = (class.construct)();
        for route in class.routes {
            self.routes.insert(
                route.path.to_string(),
                RouteEntry {
                    handler: Arc::clone(&instance),
                    operation: route.operation,
                    params: route.params,
                },
            );
            info!(path = route.path, class = class.name, "registered mapping");
        }
        Ok(())
    }

    /// Resolves a fully-qualified type name against the catalog and
    /// registers it.
    pub fn register_by_name(&mut self, name: &str) -> Result<(), ConfigError> {
        let class = self
            .catalog
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ConfigError::TypeNotFound(name.to_string()))?;
        self.register(class)
    }

    /// Registers every marker-carrying class whose qualified name lives
    /// under `namespace`. An unknown namespace registers nothing; that is
    /// not an error.
    pub fn scan_namespace(&mut self, namespace: &str) -> usize {
        let prefix = format!("{namespace}::");
        let mut registered = 0;
        for class in self.catalog {
            if class.handler_marker && class.name.starts_with(&prefix) {
                // marker already checked, register cannot fail here
                if self.register(class).is_ok() {
                    registered += 1;
                }
            }
        }
        registered
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn has_route(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    pub(crate) fn route(&self, path: &str) -> Option<&RouteEntry> {
        self.routes.get(path)
    }
}

/// Downcast shim helper for operation functions.
pub fn instance_of<T: 'static>(this: &(dyn Any + Send + Sync)) -> Result<&T, InvokeError> {
    this.downcast_ref::<T>().ok_or(InvokeError::TypeMismatch)
}

/// Fetches the bound value at one argument position.
pub fn arg(args: &[Option<String>], position: usize) -> Result<Option<&str>, InvokeError> {
    args.get(position)
        .map(Option::as_deref)
        .ok_or(InvokeError::MissingArgument(position))
}
