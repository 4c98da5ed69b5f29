pub mod fs;

/// Decodes text as UTF-8 (dropping a leading BOM), falling back to Windows-1252.
pub fn decode_text(data: &[u8]) -> String {
    let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);

    match std::str::from_utf8(data) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (text, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(data);
            text.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_text_strips_utf8_bom() {
        assert_eq!(decode_text(b"\xEF\xBB\xBFTITLE \"A\""), "TITLE \"A\"");
    }

    #[test]
    fn decode_text_keeps_utf8() {
        assert_eq!(decode_text("Für Elise".as_bytes()), "Für Elise");
    }

    #[test]
    fn decode_text_falls_back_to_windows_1252() {
        // 0xFC is 'ü', 0x93/0x94 are curly quotes in cp1252
        assert_eq!(decode_text(b"F\xFCr \x93Elise\x94"), "Für \u{201C}Elise\u{201D}");
    }
}
