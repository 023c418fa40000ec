use path_components::{components, join_components, path_components};

const SAMPLE_PATHS: &[&str] = &[
    "",
    "/",
    "//",
    "///",
    "a",
    "/a",
    "a/",
    "a/b",
    "a//b",
    "a/b/c",
    "/a/b/",
    "///a///b///",
    "./relative/../path",
    "/usr/local/bin",
    "trailing.dot./",
    "名前/с пробелом/x",
];

/// Rewrites `path` with every run of separators collapsed to a single one.
fn collapse_separators(path: &str) -> String {
    let mut canonical = String::with_capacity(path.len());
    for ch in path.chars() {
        if ch == '/' && canonical.ends_with('/') {
            continue;
        }
        canonical.push(ch);
    }
    canonical
}

#[test]
fn every_component_is_non_empty_and_the_count_matches() {
    for path in SAMPLE_PATHS {
        let parts = path_components(path);
        assert_eq!(parts.len(), parts.iter().count(), "{path:?}");
        assert!(parts.iter().all(|c| !c.is_empty()), "{path:?}");
    }
}

#[test]
fn splitting_the_same_path_twice_yields_equal_components() {
    for path in SAMPLE_PATHS {
        assert_eq!(path_components(path), path_components(path), "{path:?}");
    }
}

#[test]
fn lazy_and_owned_splitting_agree_on_every_sample() {
    for path in SAMPLE_PATHS {
        let lazy: Vec<&str> = components(path).collect();
        let owned = path_components(path);
        assert_eq!(owned.iter().collect::<Vec<_>>(), lazy, "{path:?}");
    }
}

#[test]
fn known_paths_split_exactly() {
    let expected: &[(&str, &[&str])] = &[
        ("", &[]),
        ("/", &["/"]),
        ("//", &["/", "/"]),
        ("a/b/c", &["a", "b", "c"]),
        ("/a/b/", &["/", "a", "b", "/"]),
        ("a//b", &["a", "b"]),
    ];
    for (path, parts) in expected {
        assert_eq!(
            path_components(path).iter().collect::<Vec<_>>(),
            *parts,
            "{path:?}"
        );
    }
}

#[test]
fn joining_components_reconstructs_the_collapsed_path() {
    for path in SAMPLE_PATHS {
        let joined = join_components(components(path));
        assert_eq!(joined, collapse_separators(path), "{path:?}");
    }
}

#[test]
fn joining_is_stable_on_already_canonical_paths() {
    for path in SAMPLE_PATHS {
        let canonical = join_components(components(path));
        let rejoined = join_components(components(&canonical));
        assert_eq!(rejoined, canonical, "{path:?}");
    }
}
