/// Token represents different types of parsed items in a recipe line.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Bare word: directive names, unit names, target column names.
    Word(String),
    /// Pure numeric literal.
    Number(f64),
    /// Quoted string, single or double quotes.
    StringLiteral(String),
    /// `:name` column reference.
    ColumnRef(String),
    /// `;` directive terminator.
    Semicolon,
}

pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            ' ' | '\t' | '\n' | '\r' => {
                chars.next();
            }
            '#' => {
                // Comment runs to the end of the line.
                break;
            }
            ';' => {
                chars.next();
                tokens.push(Token::Semicolon);
            }
            '"' | '\'' => {
                tokens.push(parse_string_literal(&mut chars, c));
            }
            _ if is_word_char(c) => {
                tokens.push(parse_word_or_number(&mut chars));
            }
            ':' => {
                chars.next();
                tokens.push(parse_column_ref(&mut chars));
            }
            _ => {
                // Consume 1 invalid char to prevent a hang; the parser
                // rejects the sentinel.
                chars.next();
                tokens.push(Token::Word("<INVALID>".to_string()));
            }
        }
    }

    tokens
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == '.'
}

fn parse_string_literal<I>(chars: &mut std::iter::Peekable<I>, quote: char) -> Token
where
    I: Iterator<Item = char>,
{
    let mut string = String::new();
    chars.next(); // consume opening quote

    while let Some(&c) = chars.peek() {
        match c {
            _ if c == quote => {
                chars.next(); // consume closing quote
                break;
            }
            '\\' => {
                chars.next(); // consume '\'
                if let Some(&escaped) = chars.peek() {
                    chars.next();
                    match escaped {
                        'n' => string.push('\n'),
                        't' => string.push('\t'),
                        'r' => string.push('\r'),
                        '\\' => string.push('\\'),
                        _ if escaped == quote => string.push(quote),
                        _ => string.push(escaped), // Unknown escape, keep as-is
                    }
                }
            }
            _ => {
                string.push(c);
                chars.next();
            }
        }
    }

    Token::StringLiteral(string)
}

/// Scan a run of word characters and classify it. Anything that parses as
/// a number is a `Number`; everything else, including mixed forms like
/// `10KB` or `aggregate-stats`, stays a `Word`.
fn parse_word_or_number<I>(chars: &mut std::iter::Peekable<I>) -> Token
where
    I: Iterator<Item = char>,
{
    let mut word = String::new();

    while let Some(&c) = chars.peek() {
        if is_word_char(c) {
            word.push(c);
            chars.next();
        } else {
            break;
        }
    }

    match word.parse::<f64>() {
        Ok(value) => Token::Number(value),
        Err(_) => Token::Word(word),
    }
}

fn parse_column_ref<I>(chars: &mut std::iter::Peekable<I>) -> Token
where
    I: Iterator<Item = char>,
{
    let mut name = String::new();

    while let Some(&c) = chars.peek() {
        if is_word_char(c) {
            name.push(c);
            chars.next();
        } else {
            break;
        }
    }

    if name.is_empty() {
        // Bare ':' with no column name.
        Token::Word("<INVALID>".to_string())
    } else {
        Token::ColumnRef(name)
    }
}
