//! RFC4180-style CSV field quoting and splitting.

/// Escapes a field for CSV output.
///
/// Fields containing commas, double quotes, or newlines are wrapped in
/// double quotes, with embedded quotes doubled. All other fields pass
/// through unchanged.
pub fn escape_csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Splits one CSV line into fields, honouring double-quoted fields.
///
/// Quoted fields may contain commas and doubled quotes. Unbalanced quotes
/// are tolerated by treating the remainder of the line as one field;
/// field-level validation rejects the garbage afterwards.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.is_empty() => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}
