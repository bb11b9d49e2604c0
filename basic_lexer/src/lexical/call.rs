//! Parameter-list lookahead for `CALL name(...)`
//!
//! Runs on the raw, not yet tokenized remainder of the current line. The
//! cursor is shared with the main scan loop: when a complete `(...)` list is
//! found it is moved past the closing parenthesis, so the parameters are
//! recorded in the symbol table but never emitted as tokens.

use super::analyzer::LexerError;

/// Collect the parameter names following a called function name
///
/// The first `(` at or after `*cursor` opens the list and the first `)` after
/// it closes it. The text between is split on `,`, each piece is trimmed and
/// empty pieces are dropped. Without a `(` the list is empty and the cursor
/// does not move.
pub fn parse_call_parameters(
    line: &[char],
    cursor: &mut usize,
    line_number: u32,
) -> Result<Vec<String>, LexerError> {
    let rest = line.get(*cursor..).unwrap_or_default();

    let Some(open) = rest.iter().position(|&c| c == '(').map(|p| *cursor + p) else {
        return Ok(Vec::new());
    };

    let close = line[open + 1..]
        .iter()
        .position(|&c| c == ')')
        .map(|p| open + 1 + p)
        .ok_or(LexerError::UnclosedParameterList { line: line_number })?;

    let inner: String = line[open + 1..close].iter().collect();
    let parameters = inner
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    *cursor = close + 1;
    Ok(parameters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_parameters_are_split_and_trimmed() {
        let line = chars("CALL myFunction(a, b) ");
        let mut cursor = 15;

        let params = parse_call_parameters(&line, &mut cursor, 1).unwrap();
        assert_eq!(params, vec!["a", "b"]);
        assert_eq!(cursor, 21);
    }

    #[test]
    fn test_empty_pieces_are_dropped() {
        let line = chars("f( x ,, y , )");
        let mut cursor = 1;

        let params = parse_call_parameters(&line, &mut cursor, 3).unwrap();
        assert_eq!(params, vec!["x", "y"]);
        assert_eq!(cursor, line.len());
    }

    #[test]
    fn test_empty_parentheses() {
        let line = chars("CALL go()");
        let mut cursor = 7;

        assert!(parse_call_parameters(&line, &mut cursor, 1).unwrap().is_empty());
        assert_eq!(cursor, 9);
    }

    #[test]
    fn test_no_parenthesis_consumes_nothing() {
        let line = chars("CALL Help");
        let mut cursor = 9;

        assert!(parse_call_parameters(&line, &mut cursor, 1).unwrap().is_empty());
        assert_eq!(cursor, 9);

        let line = chars("CALL Help + 1");
        let mut cursor = 9;
        assert!(parse_call_parameters(&line, &mut cursor, 1).unwrap().is_empty());
        assert_eq!(cursor, 9);
    }

    #[test]
    fn test_open_parenthesis_may_appear_later_in_line() {
        let line = chars("CALL f x (y)");
        let mut cursor = 6;

        let params = parse_call_parameters(&line, &mut cursor, 1).unwrap();
        assert_eq!(params, vec!["y"]);
        assert_eq!(cursor, line.len());
    }

    #[test]
    fn test_unclosed_list() {
        let line = chars("CALL f(a, b");
        let mut cursor = 6;

        assert_matches!(
            parse_call_parameters(&line, &mut cursor, 4),
            Err(LexerError::UnclosedParameterList { line: 4 })
        );
        assert_eq!(cursor, 6);
    }
}
