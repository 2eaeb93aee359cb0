use std::collections::HashMap;
use std::fmt;
use url::Url;

/// Error returned when a request target cannot be decomposed into a path and
/// query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTarget;

impl fmt::Display for InvalidTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid request target")
    }
}

impl std::error::Error for InvalidTarget {}

/// Represents a parsed request as seen by a route handler.
///
/// Contains the request path and the decoded query parameters. Constructed
/// per incoming request and dropped once the response has been written.
#[derive(Debug, Clone)]
pub struct Request {
    /// The request path without the query string (e.g., "/hello")
    path: String,
    /// Decoded query parameters; first occurrence wins on duplicate names
    params: HashMap<String, String>,
}

impl Request {
    /// Parses a request target (path plus optional query string) into a
    /// `Request`.
    ///
    /// # Arguments
    ///
    /// * `target` - The raw target from the request line (e.g., "/hello?name=Ana")
    ///
    /// # Returns
    ///
    /// `Ok(Request)` if the target decomposes cleanly, `Err(InvalidTarget)`
    /// otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use featherframe::http::request::Request;
    /// let req = Request::from_target("/hello?name=Ana").unwrap();
    /// assert_eq!(req.path(), "/hello");
    /// assert_eq!(req.query_value("name"), Some("Ana"));
    /// ```
    pub fn from_target(target: &str) -> Result<Self, InvalidTarget> {
        let base = Url::parse("http://localhost/").map_err(|_| InvalidTarget)?;
        let url = base.join(target).map_err(|_| InvalidTarget)?;

        let mut params = HashMap::new();
        for (key, value) in url.query_pairs() {
            // First occurrence wins when a name repeats
            params
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }

        Ok(Self {
            path: url.path().to_string(),
            params,
        })
    }

    /// Returns the request path without the query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Retrieves a query parameter value by name.
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the decoded value if the parameter is present,
    /// `None` otherwise. An empty value (`?name=`) is `Some("")`, which is
    /// distinct from an absent parameter.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|v| v.as_str())
    }
}
