// tests/dispatcher.rs
//
// tests for dispatch: path lookup, parameter binding at call time, and
// failure containment

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::collections::HashMap;
    use std::sync::Arc;

    use microserver::registry::{
        arg, instance_of, HandlerClass, Instance, InvokeError, ParamSpec, Registry, RouteSpec,
    };
    use microserver::{demo, Dispatch, Dispatcher};

    fn demo_registry() -> Registry {
        let mut registry = Registry::new(demo::catalog());
        registry.scan_namespace(demo::NAMESPACE);
        registry
    }

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn body(dispatch: Dispatch) -> String {
        match dispatch {
            Dispatch::Found(body) => body,
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn api_route_returns_index_page() {
        let registry = demo_registry();
        let body = body(registry.dispatch("/api", &query(&[])));
        assert!(body.contains("Micro WebServer"));
    }

    #[test]
    fn greeting_uses_declared_default() {
        let registry = demo_registry();
        let body = body(registry.dispatch("/greeting", &query(&[])));
        assert!(body.contains("World"));
    }

    #[test]
    fn greeting_query_value_overrides_default() {
        let registry = demo_registry();
        let body = body(registry.dispatch("/greeting", &query(&[("name", "Ana")])));
        assert!(body.contains("Ana"));
        assert!(!body.contains("World"));
    }

    #[test]
    fn unregistered_path_is_not_found() {
        let registry = demo_registry();
        assert_eq!(
            registry.dispatch("/does-not-exist", &query(&[])),
            Dispatch::NotFound
        );
    }

    #[test]
    fn lookup_is_exact_no_normalization() {
        let registry = demo_registry();
        assert_eq!(registry.dispatch("/api/", &query(&[])), Dispatch::NotFound);
        assert_eq!(registry.dispatch("/API", &query(&[])), Dispatch::NotFound);
    }

    #[test]
    fn counter_increments_per_greeting_on_shared_singleton() {
        let registry = demo_registry();
        body(registry.dispatch("/greeting", &query(&[])));
        body(registry.dispatch("/greeting", &query(&[])));
        let counter = body(registry.dispatch("/counter", &query(&[])));
        assert!(counter.contains("<strong>2</strong>"));
    }

    // --- failure containment, with a purpose-built catalog ---

    struct Faulty;

    fn failing_op(_: &(dyn Any + Send + Sync), _: &[Option<String>]) -> Result<String, InvokeError> {
        Err(InvokeError::TypeMismatch)
    }

    fn panicking_op(_: &(dyn Any + Send + Sync), _: &[Option<String>]) -> Result<String, InvokeError> {
        panic!("handler bug")
    }

    fn unbound_op(this: &(dyn Any + Send + Sync), args: &[Option<String>]) -> Result<String, InvokeError> {
        instance_of::<Faulty>(this)?;
        match arg(args, 0)? {
            None => Ok("unset".to_string()),
            Some(v) => Ok(format!("set:{v}")),
        }
    }

    fn construct_faulty() -> Instance {
        Arc::new(Faulty)
    }

    static UNBOUND_PARAMS: [ParamSpec; 1] = [ParamSpec::Unbound];

    static FAULTY_ROUTES: [RouteSpec; 3] = [
        RouteSpec {
            path: "/fails",
            params: &[],
            operation: failing_op,
        },
        RouteSpec {
            path: "/panics",
            params: &[],
            operation: panicking_op,
        },
        RouteSpec {
            path: "/unbound",
            params: &UNBOUND_PARAMS,
            operation: unbound_op,
        },
    ];

    static FAULTY_CATALOG: [HandlerClass; 1] = [HandlerClass {
        name: "dispatcher_test::Faulty",
        handler_marker: true,
        construct: construct_faulty,
        routes: &FAULTY_ROUTES,
    }];

    fn faulty_registry() -> Registry {
        let mut registry = Registry::new(&FAULTY_CATALOG);
        registry.register(&FAULTY_CATALOG[0]).unwrap();
        registry
    }

    #[test]
    fn invocation_error_becomes_handler_error() {
        let registry = faulty_registry();
        assert_eq!(
            registry.dispatch("/fails", &query(&[])),
            Dispatch::HandlerError("Internal Server Error".to_string())
        );
    }

    #[test]
    fn handler_panic_is_contained() {
        let registry = faulty_registry();
        assert_eq!(
            registry.dispatch("/panics", &query(&[])),
            Dispatch::HandlerError("Internal Server Error".to_string())
        );
    }

    #[test]
    fn unbound_position_receives_no_value() {
        let registry = faulty_registry();
        // unbound stays unset even when the query carries values
        assert_eq!(
            registry.dispatch("/unbound", &query(&[("0", "x"), ("name", "y")])),
            Dispatch::Found("unset".to_string())
        );
    }
}
