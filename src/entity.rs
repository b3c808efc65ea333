use std::borrow::Cow;

/// Decode the name of an entity reference (without `&` and `;`).
///
/// Returns `None` for names that are not predefined. A name starting with
/// `#` is a decimal character reference; it decodes to `Some(None)` when the
/// number is not a valid character.
pub(crate) fn decode_entity(entity: &str) -> Option<Option<char>> {
    match entity {
        "lt" => Some(Some('<')),
        "gt" => Some(Some('>')),
        "amp" => Some(Some('&')),
        "quot" => Some(Some('"')),
        "apos" => Some(Some('\'')),
        _ => entity
            .strip_prefix('#')
            .map(|code| code.parse::<u32>().ok().and_then(char::from_u32)),
    }
}

/// Escape text for use in element content or attribute values.
///
/// `/` and `!` are escaped as character references on top of the five
/// predefined entities.
pub(crate) fn serialize_entities(content: Cow<str>) -> Cow<str> {
    if !content.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'' | '/' | '!')) {
        return content;
    }
    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            '/' => result.push_str("&#47;"),
            '!' => result.push_str("&#33;"),
            _ => result.push(c),
        }
    }
    result.into()
}

/// Escape the text value of an element.
///
/// Leading whitespace is written as decimal character references, as the
/// parser drops leading whitespace that appears literally.
pub(crate) fn serialize_text(text: &str) -> Cow<str> {
    let rest = text.trim_start();
    if rest.len() == text.len() {
        return serialize_entities(text.into());
    }
    let mut result = String::with_capacity(text.len() + 8);
    for c in text[..text.len() - rest.len()].chars() {
        result.push_str(&format!("&#{};", c as u32));
    }
    result.push_str(&serialize_entities(rest.into()));
    result.into()
}
