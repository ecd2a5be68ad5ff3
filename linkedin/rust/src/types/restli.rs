//! Rest.li 2.0 literal syntax for query parameters.
//!
//! https://linkedin.github.io/rest.li/spec/protocol#restli-protocol-20-object-and-listarray-representation

const LIST_PREFIX: &str = "List(";
const LIST_SUFFIX: &str = ")";
const LIST_ITEM_SEP: &str = ",";
const OBJ_PREFIX: &str = "(";
const OBJ_SUFFIX: &str = ")";
const OBJ_KEY_VAL_SEP: &str = ":";
const OBJ_KEY_VAL_PAIR_SEP: &str = ",";

/// `List(a,b,c)`. Items are expected to be encoded already.
pub fn list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(LIST_ITEM_SEP);
    format!("{}{}{}", LIST_PREFIX, joined, LIST_SUFFIX)
}

/// `(k1:v1,k2:v2)`. Keys and values are expected to be encoded already.
pub fn object<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let joined = pairs
        .into_iter()
        .map(|(k, v)| format!("{}{}{}", k, OBJ_KEY_VAL_SEP, v))
        .collect::<Vec<_>>()
        .join(OBJ_KEY_VAL_PAIR_SEP);
    format!("{}{}{}", OBJ_PREFIX, joined, OBJ_SUFFIX)
}
