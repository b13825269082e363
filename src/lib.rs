// src/lib.rs
pub mod demo;
pub mod dispatcher;
pub mod http;
pub mod registry;
pub mod server;
pub mod static_files;
pub mod threadpool;

pub use dispatcher::{Dispatch, Dispatcher};
pub use http::{RequestLine, RequestLineError, Status};
pub use registry::{
    Catalog, ConfigError, HandlerClass, InvokeError, ParamSpec, Registry, RouteSpec,
};
pub use server::{Server, ServerBuilder};
pub use static_files::{NoStaticFiles, StaticContent, StaticDir, StaticFiles};
