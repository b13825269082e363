use std::collections::HashMap;

use super::ParamSpec;

/// Resolves one handler argument from its binding marker and the request's
/// query parameters. Precedence: supplied query value, then the declared
/// default, then unset. Unbound positions are always unset, regardless of
/// query contents.
pub fn bind(spec: &ParamSpec, query: &HashMap<String, String>) -> Option<String> {
    match spec {
        ParamSpec::Unbound => None,
        ParamSpec::Query { name, default } => match query.get(*name) {
            Some(value) => Some(value.clone()),
            None => default.map(str::to_string),
        },
    }
}
