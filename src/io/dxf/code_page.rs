//! `$DWGCODEPAGE` to text encoding
//!
//! Files older than AutoCAD 2007 (`AC1021`) store text in the code page named
//! by the header rather than in UTF-8.

use encoding_rs::Encoding;

/// Look up the encoding for a DXF code page name such as `ANSI_1252`.
///
/// Returns `None` for unknown names and for UTF-8, which needs no fallback.
pub fn encoding_from_code_page(code_page: &str) -> Option<&'static Encoding> {
    let name = code_page.trim().to_ascii_lowercase();
    let encoding = match name.as_str() {
        "ansi_932" => encoding_rs::SHIFT_JIS,
        "ansi_936" | "gb2312" => encoding_rs::GBK,
        "ansi_949" | "korean" | "johab" => encoding_rs::EUC_KR,
        "ansi_950" | "big5" => encoding_rs::BIG5,
        "dos866" | "dos855" | "dos437" => encoding_rs::IBM866,
        "dos850" | "dos860" | "dos861" | "dos863" | "dos865" => encoding_rs::WINDOWS_1252,
        "utf8" | "utf-8" => return None,
        _ => {
            // ANSI_125x and ISO8859-x map straight onto WHATWG labels.
            let label = if let Some(number) = name.strip_prefix("ansi_") {
                format!("windows-{number}")
            } else if let Some(part) = name
                .strip_prefix("iso8859-")
                .or_else(|| name.strip_prefix("iso_8859-"))
            {
                format!("iso-8859-{part}")
            } else {
                return None;
            };
            Encoding::for_label(label.as_bytes())?
        }
    };
    (encoding != encoding_rs::UTF_8).then_some(encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_code_pages() {
        assert_eq!(encoding_from_code_page("ANSI_1252"), Some(encoding_rs::WINDOWS_1252));
        assert_eq!(encoding_from_code_page("ansi_1251"), Some(encoding_rs::WINDOWS_1251));
    }

    #[test]
    fn test_asian_code_pages() {
        assert_eq!(encoding_from_code_page("ANSI_932"), Some(encoding_rs::SHIFT_JIS));
        assert_eq!(encoding_from_code_page("ANSI_936"), Some(encoding_rs::GBK));
    }

    #[test]
    fn test_iso_code_pages() {
        assert_eq!(encoding_from_code_page("ISO8859-2"), Some(encoding_rs::ISO_8859_2));
    }

    #[test]
    fn test_unknown_and_utf8() {
        assert_eq!(encoding_from_code_page("UTF8"), None);
        assert_eq!(encoding_from_code_page("NOT_A_PAGE"), None);
    }
}
