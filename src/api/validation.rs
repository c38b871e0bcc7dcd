use regex::Regex;

/// Checks that a configured origin looks like a plain `http(s)` origin
/// with no path or trailing slash, so URL concatenation stays sane.
pub fn valid_origin(origin: &str) -> bool {
    let re = Regex::new(r"^https?://[A-Za-z0-9.-]+(:\d+)?$").unwrap();
    re.is_match(origin)
}
