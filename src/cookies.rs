/// cookie carrying the CSRF token
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// look up a cookie value in a `Cookie` header string
///
/// The first `name=value` pair whose name matches wins. The value is
/// percent-decoded; a value with malformed escapes is returned as is.
pub fn get_cookie(cookie_header: &str, name: &str) -> Option<String> {
    if cookie_header.is_empty() {
        return None;
    }
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| percent_decode(raw).unwrap_or_else(|| raw.to_string()))
}

/// decode `%XX` escapes into UTF-8; `None` on malformed input
fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            if !hex.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            let hex = std::str::from_utf8(hex).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_cookie() {
        let header = "sessionid=abc; csrftoken=tok123; theme=dark";
        assert_eq!(get_cookie(header, CSRF_COOKIE_NAME), Some("tok123".to_string()));
        assert_eq!(get_cookie(header, "theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_missing_or_empty() {
        assert_eq!(get_cookie("", CSRF_COOKIE_NAME), None);
        assert_eq!(get_cookie("sessionid=abc", CSRF_COOKIE_NAME), None);
    }

    #[test]
    fn test_name_must_match_exactly() {
        let header = "csrftoken_old=stale; csrftoken=fresh";
        assert_eq!(get_cookie(header, CSRF_COOKIE_NAME), Some("fresh".to_string()));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(get_cookie("a=1; a=2", "a"), Some("1".to_string()));
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(get_cookie("msg=hello%20world", "msg"), Some("hello world".to_string()));
        assert_eq!(get_cookie("city=M%C3%BCnchen", "city"), Some("München".to_string()));
        assert_eq!(get_cookie("bad=100%zz", "bad"), Some("100%zz".to_string()));
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(get_cookie("csrftoken=", CSRF_COOKIE_NAME), Some(String::new()));
    }
}
