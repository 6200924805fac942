use crate::recipe::tokenizer::{Token, tokenize};

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_aggregate_stats_line() {
        let input = "aggregate-stats :data_transfer_size :response_time total_size total_time KB s";
        let tokens = tokenize(input);

        assert_eq!(
            tokens,
            vec![
                Token::Word("aggregate-stats".to_string()),
                Token::ColumnRef("data_transfer_size".to_string()),
                Token::ColumnRef("response_time".to_string()),
                Token::Word("total_size".to_string()),
                Token::Word("total_time".to_string()),
                Token::Word("KB".to_string()),
                Token::Word("s".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_semicolons_and_comments() {
        let input = "rename :a :b; drop :c # trailing note";
        let tokens = tokenize(input);

        assert_eq!(
            tokens,
            vec![
                Token::Word("rename".to_string()),
                Token::ColumnRef("a".to_string()),
                Token::ColumnRef("b".to_string()),
                Token::Semicolon,
                Token::Word("drop".to_string()),
                Token::ColumnRef("c".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_comment_only_line_is_empty() {
        assert!(tokenize("# just a comment").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_quoted_strings_with_escapes() {
        let tokens = tokenize(r#"rename "old name" 'it\'s new'"#);

        assert_eq!(
            tokens,
            vec![
                Token::Word("rename".to_string()),
                Token::StringLiteral("old name".to_string()),
                Token::StringLiteral("it's new".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_numbers_and_quantity_words() {
        // Pure numerics become numbers; digit-led mixed forms stay words so
        // quantity literals survive as single tokens.
        let tokens = tokenize("sample 0.5 10KB");

        assert_eq!(
            tokens,
            vec![
                Token::Word("sample".to_string()),
                Token::Number(0.5),
                Token::Word("10KB".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_invalid_characters_become_sentinels() {
        let tokens = tokenize("rename :a @b");
        assert!(tokens.contains(&Token::Word("<INVALID>".to_string())));

        // A bare ':' with no column name is invalid too.
        let tokens = tokenize("rename : b");
        assert!(tokens.contains(&Token::Word("<INVALID>".to_string())));
    }
}
