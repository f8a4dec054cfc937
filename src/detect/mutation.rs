//! Candidate path generation: the cross product of a detector's base paths
//! and its optional extension set.

/// Combine base paths with extensions into the full candidate list.
///
/// With no extensions this is the identity on `paths`. Otherwise the result
/// is the path-major cross product, each pair joined as `"<path>.<ext>"` —
/// exactly `|paths| * |extensions|` entries, in a deterministic order that
/// is reproducible for the same inputs.
pub fn mutate_paths(paths: &[String], extensions: &[String]) -> Vec<String> {
    if extensions.is_empty() {
        return paths.to_vec();
    }

    paths
        .iter()
        .flat_map(|path| {
            extensions
                .iter()
                .map(move |extension| format!("{path}.{extension}"))
        })
        .collect()
}
