use super::types::Language;

pub const DEFAULT_TARGET_LANGUAGE: &str = "es";

/// Danh sách ngôn ngữ đích hỗ trợ, theo thứ tự hiển thị trong combo box.
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "nl", name: "Dutch" },
    Language { code: "ru", name: "Russian" },
    Language { code: "uk", name: "Ukrainian" },
    Language { code: "pl", name: "Polish" },
    Language { code: "tr", name: "Turkish" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "vi", name: "Vietnamese" },
    Language { code: "th", name: "Thai" },
    Language { code: "id", name: "Indonesian" },
    Language { code: "sv", name: "Swedish" },
];

pub fn find(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|language| language.code.eq_ignore_ascii_case(code))
}

/// Tên hiển thị của một mã ngôn ngữ; mã lạ được trả về nguyên vẹn.
pub fn display_name(code: &str) -> &str {
    find(code).map(|language| language.name).unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_is_supported() {
        assert!(find(DEFAULT_TARGET_LANGUAGE).is_some());
    }

    #[test]
    fn codes_are_unique() {
        for (i, language) in SUPPORTED_LANGUAGES.iter().enumerate() {
            assert!(
                SUPPORTED_LANGUAGES[i + 1..]
                    .iter()
                    .all(|other| other.code != language.code),
                "duplicate code {}",
                language.code
            );
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find("EN").map(|l| l.name), Some("English"));
    }

    #[test]
    fn unknown_code_displays_as_is() {
        assert_eq!(display_name("xx"), "xx");
        assert_eq!(display_name("ja"), "Japanese");
    }
}
