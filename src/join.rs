use crate::components::{is_root_marker, SEPARATOR};

/// Joins components back into a path.
///
/// Non-root components are glued together with a single separator; a root
/// marker contributes a separator only when one is not already present, so a
/// leading marker produces the absolute prefix and a trailing marker the
/// final slash. For any `path`, joining the components of `path` yields its
/// canonical form: repeated separators collapsed, leading and trailing
/// separators kept.
///
/// ```
/// use path_components::{components, join_components};
///
/// assert_eq!(join_components(components("///a//b/")), "/a/b/");
/// assert_eq!(join_components(["a", "b", "c"]), "a/b/c");
/// ```
pub fn join_components<I>(components: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joined = String::new();
    for component in components {
        let component = component.as_ref();
        if is_root_marker(component) {
            if !joined.ends_with(SEPARATOR) {
                joined.push(SEPARATOR);
            }
            continue;
        }
        if !joined.is_empty() && !joined.ends_with(SEPARATOR) {
            joined.push(SEPARATOR);
        }
        joined.push_str(component);
    }
    joined
}
