//! Identifier casing compatible with the Swift protobuf runtime.
//!
//! Generated code refers to message fields and package-derived type prefixes by the names
//! the Swift protobuf compiler gives them, so these rules must match it exactly:
//! words break on `_`, on lower→upper transitions, between letters and digits, and before
//! the last capital of an upper-case run that is followed by a lower-case letter.
//! The words `id`, `url`, `http` and `https` are written fully upper case unless they
//! start a lower camel case identifier.

/// Words that are rendered fully upper case when they are not the leading word.
const UPPER_WORDS: &[&str] = &["id", "url", "http", "https"];

/// Convert a proto identifier to lowerCamelCase.
///
/// # Examples
/// ```
/// use zap_semantics::to_lower_camel_case;
///
/// assert_eq!(to_lower_camel_case("funding_txid_str"), "fundingTxidStr");
/// assert_eq!(to_lower_camel_case("chan_id"), "chanID");
/// ```
pub fn to_lower_camel_case(name: &str) -> String { camel_case(name, false) }

/// Convert a proto identifier to UpperCamelCase (`package_name` → `PackageName`).
pub fn to_upper_camel_case(name: &str) -> String { camel_case(name, true) }

fn camel_case(name: &str, initial_upper: bool) -> String {
    let mut result = String::with_capacity(name.len());
    for (index, word) in split_words(name).iter().enumerate() {
        let lower = word.to_lowercase();
        if index == 0 && !initial_upper {
            result.push_str(&lower);
        } else if UPPER_WORDS.contains(&lower.as_str()) {
            result.push_str(&lower.to_uppercase());
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                result.extend(first.to_uppercase());
                result.push_str(chars.as_str());
            }
        }
    }
    result
}

fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_ascii_digit() != c.is_ascii_digit())
                || (prev.is_uppercase() && c.is_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_camel_case() {
        assert_eq!(to_lower_camel_case("chan_point"), "chanPoint");
        assert_eq!(to_lower_camel_case("funding_txid_str"), "fundingTxidStr");
        assert_eq!(to_lower_camel_case("pub_key"), "pubKey");
        assert_eq!(to_lower_camel_case("output_index"), "outputIndex");
        assert_eq!(to_lower_camel_case("already_camelCase"), "alreadyCamelCase");
        assert_eq!(to_lower_camel_case("r_hash_str"), "rHashStr");
    }

    #[test]
    fn test_special_upper_words() {
        assert_eq!(to_lower_camel_case("chan_id"), "chanID");
        assert_eq!(to_lower_camel_case("id"), "id");
        assert_eq!(to_lower_camel_case("payment_url"), "paymentURL");
        assert_eq!(to_upper_camel_case("http_rule"), "HTTPRule");
    }

    #[test]
    fn test_upper_camel_case() {
        assert_eq!(to_upper_camel_case("lnrpc"), "Lnrpc");
        assert_eq!(to_upper_camel_case("package_name"), "PackageName");
        assert_eq!(to_upper_camel_case("routerrpc"), "Routerrpc");
        assert_eq!(to_upper_camel_case("v1"), "V1");
    }

    #[test]
    fn test_word_boundaries() {
        assert_eq!(split_words("URLValue"), vec!["URL", "Value"]);
        assert_eq!(split_words("field2name"), vec!["field", "2", "name"]);
        assert_eq!(split_words("__a__b"), vec!["a", "b"]);
        assert!(split_words("").is_empty());
    }
}
