use std::collections::HashSet;

use crate::fingerprint::fingerprint;

/// Returns the items whose fingerprint appears in `tokens`, in item order.
///
/// Each item is reported at most once no matter how many equal tokens the set
/// holds.
pub fn find_matches<I, T>(items: I, tokens: T) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let tokens: HashSet<String> = tokens
        .into_iter()
        .map(|token| token.as_ref().to_string())
        .collect();
    if tokens.is_empty() {
        return Vec::new();
    }

    items
        .into_iter()
        .filter(|item| tokens.contains(&fingerprint(item.as_ref())))
        .map(|item| item.as_ref().to_string())
        .collect()
}
