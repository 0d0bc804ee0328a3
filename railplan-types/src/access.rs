//! Get-with-default readers over untyped JSON objects.
//!
//! Each reader documents its default once. A missing key and a key holding
//! the wrong JSON type are indistinguishable to callers.

use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

/// The value under the first key in `keys` that exists in `obj`.
pub fn first_present<'a>(obj: &'a Object, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| obj.get(*k))
}

/// Array at `key`. Default: empty.
pub fn array<'a>(obj: &'a Object, key: &str) -> &'a [Value] {
    obj.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Object at `key`. Default: `None`, read as an empty object.
pub fn object<'a>(obj: &'a Object, key: &str) -> Option<&'a Object> {
    obj.get(key).and_then(Value::as_object)
}

/// String at `key` if present and non-empty. Default: `None`.
pub fn non_empty_str<'a>(obj: &'a Object, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Like [`non_empty_str`], reading the first present alias.
pub fn non_empty_str_any<'a>(obj: &'a Object, keys: &[&str]) -> Option<&'a str> {
    first_present(obj, keys)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Integer at `key`. Default: `None`. Floats and out-of-range numbers do not count.
pub fn integer(obj: &Object, key: &str) -> Option<i64> {
    obj.get(key).and_then(Value::as_i64)
}

/// `true` only for the JSON literal `true`. Default: `false`.
pub fn is_true(obj: &Object, key: &str) -> bool {
    matches!(obj.get(key), Some(Value::Bool(true)))
}

/// String elements of the array under the first present alias, in order.
/// Non-string elements are skipped. Default: empty.
pub fn string_list_any(obj: &Object, keys: &[&str]) -> Vec<String> {
    first_present(obj, keys)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Like [`string_list_any`], keeping only names usable as a single token:
/// non-empty with no whitespace or control characters. Anything else is
/// dropped so joined names stay on one line.
pub fn token_list_any(obj: &Object, keys: &[&str]) -> Vec<String> {
    let mut names = string_list_any(obj, keys);
    names.retain(|name| is_token(name));
    names
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c.is_control())
}

/// Integer elements of the array at `key`, in order. Default: empty.
pub fn integer_list(obj: &Object, key: &str) -> Vec<i64> {
    array(obj, key).iter().filter_map(Value::as_i64).collect()
}
