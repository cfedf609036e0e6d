/// Normalizes free-text attribute values into stable node identifiers.
///
/// The same function is used when building the graph and when planning
/// queries; any divergence between the two sides silently breaks all
/// matching, so there is exactly one implementation.
///
/// Transformation table:
///
/// | input                     | output                          |
/// |---------------------------|---------------------------------|
/// | whitespace, `-`           | `_`                             |
/// | `'`                       | removed                         |
/// | `,`                       | removed                         |
/// | `&`                       | `and`                           |
/// | ASCII alphanumeric, `_`   | unchanged                       |
/// | anything else             | percent-encoded per UTF-8 byte  |
///
/// Empty input yields an empty identifier; callers must skip emitting
/// nodes, edges, or patterns for empty identifiers.
pub fn normalize(text: &str) -> String {
    let mut ident = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            c if c.is_whitespace() => ident.push('_'),
            '-' => ident.push('_'),
            '\'' | ',' => {}
            '&' => ident.push_str("and"),
            c if c.is_ascii_alphanumeric() || c == '_' => ident.push(c),
            c => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    ident.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }

    ident
}
