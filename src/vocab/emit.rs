//! Declaration emitter: one `term`/`property` statement per vocabulary term

use super::classify::Bucket;
use super::serialize::{is_bare_identifier, serialize_attribute, symbol};
use super::term::{AttributeMap, VOCAB_KEY};

const DECLARATION_INDENT: &str = "    ";
const ATTRIBUTE_SEPARATOR: &str = ",\n      ";

/// Render the declaration for one term
///
/// Attributes are ordered by key, so the output does not depend on the order
/// in which the graph produced them. The reserved vocabulary key is never
/// written.
pub fn emit_declaration(name: &str, attributes: &AttributeMap, bucket: Bucket) -> String {
    let mut keys: Vec<&String> = attributes
        .keys()
        .filter(|key| key.as_str() != VOCAB_KEY)
        .collect();
    keys.sort();

    let mut components = Vec::with_capacity(keys.len() + 1);
    components.push(format!("{}{} {}", DECLARATION_INDENT, bucket.declarator(), symbol(name)));

    for key in keys {
        let value = &attributes[key.as_str()];
        components.push(format!("{}{}", render_key(key), serialize_attribute(value, key)));
    }

    components.join(ATTRIBUTE_SEPARATOR)
}

fn render_key(key: &str) -> String {
    if is_bare_identifier(key) {
        format!("{}: ", key)
    } else {
        format!("{} => ", symbol(key))
    }
}
