use std::ops::Index;
use std::slice;
use std::vec;

/// The only separator this crate recognizes.
pub const SEPARATOR: char = '/';

/// The root marker: a separator emitted as a component of its own when it
/// appears at the very start or very end of a path.
pub const ROOT: &str = "/";

pub fn is_root_marker(component: &str) -> bool {
    component == ROOT
}

#[derive(Debug, Clone, Copy)]
enum State {
    LeadingRoot,
    Body,
    Done,
}

/// Borrowed iterator over the components of a path.
///
/// Yields root markers and maximal runs of non-separator characters in order
/// of appearance. Runs of consecutive interior separators collapse into a
/// single boundary, so no yielded component is ever empty.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Components<'a> {
    path: &'a str,
    pos: usize,
    state: State,
}

impl<'a> Components<'a> {
    fn new(path: &'a str) -> Self {
        let state = if path.is_empty() {
            State::Done
        } else if path.starts_with(SEPARATOR) {
            State::LeadingRoot
        } else {
            State::Body
        };
        Self {
            path,
            pos: 0,
            state,
        }
    }

    fn trailing_root(&self) -> Option<&'a str> {
        // A bare "/" already produced its root marker as the leading one;
        // only paths longer than one character get a trailing marker.
        if self.path.len() > 1 && self.path.ends_with(SEPARATOR) {
            Some(&self.path[self.path.len() - 1..])
        } else {
            None
        }
    }
}

impl<'a> Iterator for Components<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        match self.state {
            State::Done => None,
            State::LeadingRoot => {
                self.state = State::Body;
                Some(&self.path[..1])
            }
            State::Body => {
                let rest = &self.path[self.pos..];
                let run = rest.trim_start_matches(SEPARATOR);
                self.pos += rest.len() - run.len();
                if run.is_empty() {
                    self.state = State::Done;
                    return self.trailing_root();
                }
                let len = run.find(SEPARATOR).unwrap_or(run.len());
                let start = self.pos;
                self.pos += len;
                Some(&self.path[start..start + len])
            }
        }
    }
}

/// Iterates over the components of `path` without allocating.
pub fn components(path: &str) -> Components<'_> {
    Components::new(path)
}

/// Splits `path` into owned components.
///
/// A leading separator becomes a `"/"` root-marker component; a trailing
/// separator becomes one too, unless the whole path is just `"/"`. Everything
/// in between is split on runs of separators. The empty path produces an
/// empty result.
///
/// ```
/// use path_components::path_components;
///
/// let parts = path_components("/usr//local/bin/");
/// assert_eq!(parts.as_slice(), ["/", "usr", "local", "bin", "/"]);
/// assert!(path_components("").is_empty());
/// ```
pub fn path_components(path: &str) -> PathComponents {
    PathComponents {
        components: components(path).map(str::to_owned).collect(),
    }
}

/// Owned result of [`path_components`]: the components of one path, in order
/// of appearance, together with their backing storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PathComponents {
    components: Vec<String>,
}

impl PathComponents {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.components
    }

    pub fn into_vec(self) -> Vec<String> {
        self.components
    }

    /// Joins the components back into a canonical path. See
    /// [`join_components`](crate::join_components).
    pub fn join(&self) -> String {
        crate::join::join_components(&self.components)
    }
}

impl Index<usize> for PathComponents {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.components[index]
    }
}

impl IntoIterator for PathComponents {
    type Item = String;
    type IntoIter = vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a> IntoIterator for &'a PathComponents {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
