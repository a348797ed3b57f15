use std::collections::HashSet;

/// Keep candidates that are not `known`, in input order.
///
/// Candidates are not deduplicated among themselves: a new id present twice
/// in `candidates` is present twice in the output.
pub fn filter_new<S: AsRef<str>>(candidates: &[S], known: &HashSet<String>) -> Vec<String> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| !known.contains(*c))
        .map(String::from)
        .collect()
}
