// tests/request_line.rs
//
// tests for request-line tokenization and query-parameter parsing

#[cfg(test)]
mod tests {
    use microserver::{RequestLine, RequestLineError};

    #[test]
    fn parses_plain_request_line() {
        let r = RequestLine::parse("GET /api HTTP/1.1").unwrap();
        assert_eq!(r.method, "GET");
        assert_eq!(r.path, "/api");
        assert!(r.query.is_empty());
    }

    #[test]
    fn parses_query_parameters() {
        let r = RequestLine::parse("GET /greeting?name=Ana&lang=en HTTP/1.1").unwrap();
        assert_eq!(r.path, "/greeting");
        assert_eq!(r.query.get("name").map(String::as_str), Some("Ana"));
        assert_eq!(r.query.get("lang").map(String::as_str), Some("en"));
    }

    #[test]
    fn splits_pair_on_first_equals_only() {
        let r = RequestLine::parse("GET /x?expr=a=b HTTP/1.1").unwrap();
        assert_eq!(r.query.get("expr").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn keeps_pair_with_empty_value() {
        let r = RequestLine::parse("GET /x?name= HTTP/1.1").unwrap();
        assert_eq!(r.query.get("name").map(String::as_str), Some(""));
    }

    #[test]
    fn drops_pairs_without_equals() {
        let r = RequestLine::parse("GET /x?flag&name=Ana HTTP/1.1").unwrap();
        assert!(!r.query.contains_key("flag"));
        assert_eq!(r.query.get("name").map(String::as_str), Some("Ana"));
    }

    #[test]
    fn does_not_percent_decode() {
        let r = RequestLine::parse("GET /x?name=Ana%20Mar%C3%ADa HTTP/1.1").unwrap();
        assert_eq!(
            r.query.get("name").map(String::as_str),
            Some("Ana%20Mar%C3%ADa")
        );
    }

    #[test]
    fn only_first_question_mark_splits_the_target() {
        let r = RequestLine::parse("GET /x?a=1?b=2 HTTP/1.1").unwrap();
        assert_eq!(r.path, "/x");
        assert_eq!(r.query.get("a").map(String::as_str), Some("1?b=2"));
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert_eq!(RequestLine::parse("GET"), Err(RequestLineError::Malformed));
        assert_eq!(
            RequestLine::parse("GET /api"),
            Err(RequestLineError::Malformed)
        );
        assert_eq!(
            RequestLine::parse("GET  /api HTTP/1.1"),
            Err(RequestLineError::Malformed)
        );
        assert_eq!(
            RequestLine::parse("GET /api HTTP/1.1 extra"),
            Err(RequestLineError::Malformed)
        );
        assert_eq!(RequestLine::parse(""), Err(RequestLineError::Malformed));
    }

    #[test]
    fn method_is_kept_verbatim() {
        // case-sensitivity is enforced by the connection handler, so the
        // parsed method must not be normalized here
        let r = RequestLine::parse("get /api HTTP/1.1").unwrap();
        assert_eq!(r.method, "get");
    }
}
