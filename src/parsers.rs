// src/parsers.rs
/// Parse a field separator.
///
/// Accepts a single character, or the spellings `\t`, `tab`, `TAB` for the
/// horizontal tab since a literal tab is awkward to type on a command line.
pub fn parse_separator(s: &str) -> Result<char, String> {
    match s {
        "\\t" | "tab" | "TAB" => return Ok('\t'),
        "" => return Err("separator cannot be empty".to_string()),
        _ => {}
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("separator must be a single character, got '{s}'")),
    }
}

/// 1-based line number (0 is rejected).
pub fn parse_line_number(s: &str) -> Result<usize, String> {
    let s = s.trim();
    let value = s
        .parse::<usize>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value == 0 {
        return Err("line numbers start at 1".to_string());
    }
    Ok(value)
}
