/// Longest prefix shared by every string in `strs`.
///
/// The first string is the initial candidate; it loses trailing chars until
/// each following string starts with it. An empty slice, or any empty
/// string, yields `""`; a single string is returned unchanged.
///
/// ```
/// assert_eq!(stralgo::longest_common_prefix(&["flower", "flow", "flight"]), "fl");
/// ```
pub fn longest_common_prefix<S: AsRef<str>>(strs: &[S]) -> String {
    let Some((first, rest)) = strs.split_first() else {
        return String::new();
    };
    let mut prefix = first.as_ref().to_string();
    for s in rest {
        while !s.as_ref().starts_with(prefix.as_str()) {
            prefix.pop();
        }
        if prefix.is_empty() {
            break;
        }
    }
    prefix
}
