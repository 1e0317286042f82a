use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default query normalization: trim, NFC, lowercase. Diacritics and
    // punctuation pass through untouched.
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        text.nfc().collect::<String>().to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        let preprocessor = DefaultPreprocessor;
        assert_eq!(preprocessor.process("  Werken \n"), "werken");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        let preprocessor = DefaultPreprocessor;
        assert_eq!(preprocessor.process("   \t"), "");
    }

    #[test]
    fn diacritics_are_kept() {
        let preprocessor = DefaultPreprocessor;
        // Decomposed e + combining acute composes to a single char.
        assert_eq!(preprocessor.process("ge\u{0301}e\u{0301}rd"), "géérd");
    }
}
