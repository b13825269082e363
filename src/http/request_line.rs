// src/http/request_line.rs
//
// responsibilities:
//  * tokenizing the request line (method SP target SP version)
//  * splitting the target into path + query parameters

use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RequestLineError {
    #[error("malformed request line")]
    Malformed,
}

/// One parsed request line. Rebuilt for every connection; never outlives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
}

impl RequestLine {
    /// Parses `"GET /path?k=v HTTP/1.1"`. The line must split on single
    /// spaces into exactly three tokens; a missing version or a doubled
    /// separator space fails the count and is rejected.
    pub fn parse(line: &str) -> Result<RequestLine, RequestLineError> {
        let tokens: Vec<&str> = line.split(' ').collect();
        if tokens.len() != 3 {
            return Err(RequestLineError::Malformed);
        }

        let (path, query) = match tokens[1].split_once('?') {
            Some((path, raw_query)) => (path, parse_query(raw_query)),
            None => (tokens[1], HashMap::new()),
        };

        Ok(RequestLine {
            method: tokens[0].to_string(),
            path: path.to_string(),
            query,
        })
    }
}

// pairs split on '&', then on the first '='; pairs without '=' are dropped.
// values are used raw: no percent-decoding happens anywhere in the server.
fn parse_query(raw: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for pair in raw.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            params.insert(key.to_string(), value.to_string());
        }
    }
    params
}
