//! Safe placeholder substitution for status templates.

/// Substitutes `{name}` placeholders in `template` from `values`.
///
/// Placeholders with no matching entry render as an empty string instead of
/// failing, so user templates can never break the status line. Literal
/// braces are written doubled (`{{` and `}}`); an unterminated placeholder
/// is emitted as-is.
pub fn safe_format(template: &str, values: &[(&str, &str)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        match c {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    rendered.push('{');
                    continue;
                }
                let mut name = String::new();
                let mut terminated = false;
                for (_, inner) in chars.by_ref() {
                    if inner == '}' {
                        terminated = true;
                        break;
                    }
                    name.push(inner);
                }
                if terminated {
                    if let Some((_, value)) = values.iter().find(|(key, _)| *key == name) {
                        rendered.push_str(value);
                    }
                } else {
                    rendered.push_str(&template[index..]);
                    break;
                }
            }
            '}' => {
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                rendered.push('}');
            }
            other => rendered.push(other),
        }
    }
    rendered
}
