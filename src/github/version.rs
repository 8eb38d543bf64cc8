use once_cell::sync::Lazy;
use regex::Regex;

static VERSION_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"v\d+\.\d+\.").expect("invalid version prefix pattern"));

/// Extracts the coarse `vMAJOR.MINOR.` prefix from a branch name, e.g.
/// `v5.0.x` yields `v5.0.`.
pub fn target_version_prefix(branch: &str) -> Option<String> {
    VERSION_PREFIX
        .find(branch)
        .map(|matched| matched.as_str().to_owned())
}
