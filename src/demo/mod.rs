// src/demo/mod.rs
//
// demo handler groups plus the static catalog that name-based registration
// and namespace scanning resolve against

use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::registry::{
    arg, instance_of, Catalog, HandlerClass, Instance, InvokeError, ParamSpec, RouteSpec,
};

pub const NAMESPACE: &str = "microserver::demo";

/// Landing page plus a framework-information page.
pub struct HelloHandler;

impl HelloHandler {
    fn index(&self) -> String {
        "<!DOCTYPE html>\
         <html lang='en'>\
         <head><meta charset='UTF-8'><title>Micro WebServer</title></head>\
         <body>\
         <h1>Micro WebServer</h1>\
         <p>A minimal web server with declarative GET route registration.</p>\
         <ul>\
         <li><a href='/greeting'>Greeting service</a> \
         (query binding: <a href='/greeting?name=Student'>/greeting?name=Student</a>)</li>\
         <li><a href='/info'>Framework information</a></li>\
         <li><a href='/counter'>Request counter</a></li>\
         </ul>\
         </body></html>"
            .to_string()
    }

    fn info(&self) -> String {
        "<!DOCTYPE html>\
         <html lang='en'>\
         <head><meta charset='UTF-8'><title>Framework Information</title></head>\
         <body>\
         <h1>Framework Information</h1>\
         <p>Handler groups are registered through static route descriptors.</p>\
         <ul>\
         <li><strong>handler marker</strong>: marks a type as a handler group</li>\
         <li><strong>route marker</strong>: maps a GET path to one operation</li>\
         <li><strong>binding marker</strong>: binds a query parameter, with an optional default</li>\
         </ul>\
         <p><a href='/'>Home</a> | <a href='/greeting'>Greeting</a></p>\
         </body></html>"
            .to_string()
    }
}

/// Demonstrates query-parameter binding with a default, plus a per-instance
/// request counter shared by both of its routes.
pub struct GreetingHandler {
    counter: AtomicU64,
}

impl GreetingHandler {
    fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    fn greeting(&self, name: Option<&str>) -> String {
        let name = name.unwrap_or_default();
        let count = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!(
            "<!DOCTYPE html>\
             <html lang='en'>\
             <head><meta charset='UTF-8'><title>Greeting</title></head>\
             <body>\
             <h1>Greeting Service</h1>\
             <p><strong>Hello, {name}!</strong></p>\
             <p>Request #{count}</p>\
             <p><a href='/'>Home</a> | <a href='/counter'>Counter</a></p>\
             </body></html>"
        )
    }

    fn counter(&self) -> String {
        format!(
            "<!DOCTYPE html>\
             <html lang='en'>\
             <head><meta charset='UTF-8'><title>Counter</title></head>\
             <body>\
             <h1>Request Counter</h1>\
             <p>Greetings served: <strong>{}</strong></p>\
             <p><a href='/'>Home</a></p>\
             </body></html>",
            self.counter.load(Ordering::SeqCst)
        )
    }
}

// operation shims: downcast the singleton, pull bound arguments, forward

fn hello_index(this: &(dyn Any + Send + Sync), _args: &[Option<String>]) -> Result<String, InvokeError> {
    Ok(instance_of::<HelloHandler>(this)?.index())
}

fn hello_info(this: &(dyn Any + Send + Sync), _args: &[Option<String>]) -> Result<String, InvokeError> {
    Ok(instance_of::<HelloHandler>(this)?.info())
}

fn greeting_greet(this: &(dyn Any + Send + Sync), args: &[Option<String>]) -> Result<String, InvokeError> {
    let handler = instance_of::<GreetingHandler>(this)?;
    let name = arg(args, 0)?;
    Ok(handler.greeting(name))
}

fn greeting_counter(this: &(dyn Any + Send + Sync), _args: &[Option<String>]) -> Result<String, InvokeError> {
    Ok(instance_of::<GreetingHandler>(this)?.counter())
}

fn construct_hello() -> Instance {
    Arc::new(HelloHandler)
}

fn construct_greeting() -> Instance {
    Arc::new(GreetingHandler::new())
}

static GREETING_PARAMS: [ParamSpec; 1] = [ParamSpec::Query {
    name: "name",
    default: Some("World"),
}];

static HELLO_ROUTES: [RouteSpec; 2] = [
    RouteSpec {
        path: "/api",
        params: &[],
        operation: hello_index,
    },
    RouteSpec {
        path: "/info",
        params: &[],
        operation: hello_info,
    },
];

static GREETING_ROUTES: [RouteSpec; 2] = [
    RouteSpec {
        path: "/greeting",
        params: &GREETING_PARAMS,
        operation: greeting_greet,
    },
    RouteSpec {
        path: "/counter",
        params: &[],
        operation: greeting_counter,
    },
];

static CATALOG: [HandlerClass; 2] = [
    HandlerClass {
        name: "microserver::demo::HelloHandler",
        handler_marker: true,
        construct: construct_hello,
        routes: &HELLO_ROUTES,
    },
    HandlerClass {
        name: "microserver::demo::GreetingHandler",
        handler_marker: true,
        construct: construct_greeting,
        routes: &GREETING_ROUTES,
    },
];

pub fn catalog() -> Catalog {
    &CATALOG
}
