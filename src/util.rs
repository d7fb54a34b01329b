use arcstr::ArcStr;

/// Derives the directive name of a host model: its first character
/// lower-cased.
///
/// ```
/// # use graphql_dsl::util::to_directive_name;
/// assert_eq!(to_directive_name("Auth"), "auth");
/// assert_eq!(to_directive_name("CacheControl"), "cacheControl");
/// ```
pub fn to_directive_name(s: &str) -> ArcStr {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect::<String>().into(),
        None => ArcStr::new(),
    }
}

/// Checks whether a description needs the block string form.
pub(crate) fn is_multiline(s: &str) -> bool {
    s.contains('\n')
}
