use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A token is either a run of word characters (alphanumerics plus
    // double-quote, underscore and hyphen) or a single non-whitespace
    // character. Whitespace separates tokens and is never emitted.
    static ref TOKEN: Regex = Regex::new(r#"[A-Za-z0-9"_-]+|\S"#).unwrap();
}

/// Splits review text into tokens, preserving original casing.
pub struct Tokenizer;

impl Tokenizer {
    /// Scan `text` left to right and yield its tokens in order.
    ///
    /// Punctuation comes out one character per token, so "Hi, there!"
    /// yields ["Hi", ",", "there", "!"].
    pub fn tokenize<'a>(text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        TOKEN.find_iter(text).map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<&str> {
        Tokenizer::tokenize(text).collect()
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(tokens("").is_empty());
    }

    #[test]
    fn whitespace_only_yields_nothing() {
        assert!(tokens("   ").is_empty());
        assert!(tokens("\t\n  \r\n").is_empty());
    }

    #[test]
    fn hyphen_underscore_and_quote_are_word_characters() {
        assert_eq!(tokens("good-bad"), vec!["good-bad"]);
        assert_eq!(tokens("snake_case"), vec!["snake_case"]);
        assert_eq!(tokens("\"quoted\""), vec!["\"quoted\""]);
    }

    #[test]
    fn punctuation_splits_into_single_character_tokens() {
        assert_eq!(tokens("Hi, there!"), vec!["Hi", ",", "there", "!"]);
        assert_eq!(tokens("what?!"), vec!["what", "?", "!"]);
    }

    #[test]
    fn casing_is_preserved() {
        assert_eq!(tokens("Great MOVIE"), vec!["Great", "MOVIE"]);
    }

    #[test]
    fn trailing_run_is_flushed() {
        assert_eq!(tokens("the end"), vec!["the", "end"]);
        assert_eq!(tokens("end."), vec!["end", "."]);
    }

    #[test]
    fn space_joined_tokens_retokenize_identically() {
        let input = "a plain sequence of word-tokens only";
        let first: Vec<String> = tokens(input).iter().map(|t| t.to_string()).collect();
        let rejoined = first.join(" ");
        let second: Vec<&str> = tokens(&rejoined);
        assert_eq!(first, second);
    }
}
