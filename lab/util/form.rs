/// Decodes a percent-encoded string (`%XX`) and converts `+` to space.
///
/// Decodes into bytes first so multi-byte UTF-8 sequences survive, then
/// converts lossily. Malformed `%` sequences are left as-is.
pub fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hi = (bytes[i + 1] as char).to_digit(16);
                let lo = (bytes[i + 2] as char).to_digit(16);
                match (hi, lo) {
                    (Some(h), Some(l)) => {
                        out.push(((h << 4) | l) as u8);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Parses `key=value&key2=value2` into a `Vec` of `(key, value)` pairs.
pub fn parse_form(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter_map(|pair| {
            let mut it = pair.splitn(2, '=');
            let k = it.next()?.to_owned();
            let v = it.next().unwrap_or("").to_owned();
            Some((url_decode(&k), url_decode(&v)))
        })
        .collect()
}

/// Looks up a key in parsed form pairs, returning the value if found.
pub fn form_get<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_and_plus() {
        assert_eq!(url_decode("1+2%0A3+4"), "1 2\n3 4");
        assert_eq!(url_decode("0%2C5"), "0,5");
    }

    #[test]
    fn decodes_multibyte_utf8() {
        // 'é' is %C3%A9 — two percent-escapes forming one code point.
        assert_eq!(url_decode("%C3%A9"), "é");
    }

    #[test]
    fn leaves_malformed_escapes_alone() {
        assert_eq!(url_decode("100%"), "100%");
        assert_eq!(url_decode("%zz"), "%zz");
    }

    #[test]
    fn parses_pairs_and_looks_up_keys() {
        let pairs = parse_form("size=5&auto=on&vector=1%0A2");
        assert_eq!(form_get(&pairs, "size"), Some("5"));
        assert_eq!(form_get(&pairs, "auto"), Some("on"));
        assert_eq!(form_get(&pairs, "vector"), Some("1\n2"));
        assert_eq!(form_get(&pairs, "missing"), None);
    }
}
