//! Quote-aware field splitting for export lines
//!
//! A quote character toggles "inside quoted span" mode and is dropped; a comma
//! separates fields only outside a quoted span. Nothing is unescaped, so a
//! doubled quote just toggles twice.

use crate::constants::{FIELD_SEPARATOR, QUOTE_CHAR};

/// Split one raw line into its fields
///
/// The last accumulated field is always emitted, so an empty line yields one
/// empty field and a trailing comma yields a trailing empty field.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        if c == QUOTE_CHAR {
            in_quotes = !in_quotes;
        } else if c == FIELD_SEPARATOR && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(split_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_comma_inside_quotes_is_kept() {
        assert_eq!(
            split_line(r#"1,"Sanderson, Brandon",x"#),
            vec!["1", "Sanderson, Brandon", "x"]
        );
    }

    #[test]
    fn test_doubled_quotes_are_not_unescaped() {
        // "" toggles twice and contributes nothing
        assert_eq!(
            split_line(r#""He said ""hi"", then left",2"#),
            vec!["He said hi, then left", "2"]
        );
    }

    #[test]
    fn test_empty_and_trailing_fields() {
        assert_eq!(split_line(""), vec![""]);
        assert_eq!(split_line("a,"), vec!["a", ""]);
        assert_eq!(split_line(",,"), vec!["", "", ""]);
    }

    #[test]
    fn test_unterminated_quote_swallows_rest_of_line() {
        assert_eq!(split_line(r#"a,"b,c"#), vec!["a", "b,c"]);
    }
}
