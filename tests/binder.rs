// tests/binder.rs
//
// tests for parameter binding: query value > declared default > unset

#[cfg(test)]
mod tests {
    use microserver::registry::{bind, ParamSpec};
    use std::collections::HashMap;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn query_value_overrides_default() {
        let spec = ParamSpec::Query {
            name: "name",
            default: Some("World"),
        };
        assert_eq!(
            bind(&spec, &query(&[("name", "Ana")])),
            Some("Ana".to_string())
        );
    }

    #[test]
    fn default_used_when_value_absent() {
        let spec = ParamSpec::Query {
            name: "name",
            default: Some("World"),
        };
        assert_eq!(bind(&spec, &query(&[])), Some("World".to_string()));
        assert_eq!(
            bind(&spec, &query(&[("other", "x")])),
            Some("World".to_string())
        );
    }

    #[test]
    fn no_default_yields_unset() {
        let spec = ParamSpec::Query {
            name: "name",
            default: None,
        };
        assert_eq!(bind(&spec, &query(&[])), None);
    }

    #[test]
    fn empty_default_is_distinct_from_no_default() {
        let spec = ParamSpec::Query {
            name: "name",
            default: Some(""),
        };
        assert_eq!(bind(&spec, &query(&[])), Some(String::new()));
    }

    #[test]
    fn empty_query_value_still_overrides() {
        let spec = ParamSpec::Query {
            name: "name",
            default: Some("World"),
        };
        assert_eq!(bind(&spec, &query(&[("name", "")])), Some(String::new()));
    }

    #[test]
    fn unbound_is_always_unset() {
        assert_eq!(bind(&ParamSpec::Unbound, &query(&[("name", "Ana")])), None);
    }
}
