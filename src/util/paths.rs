use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "CarValueRecommender";
const APP_NAME: &str = "CarValueRecommender";

/// Path of `name` inside the platform data directory, if one exists.
pub fn data_file(name: &str) -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.data_dir().join(name))
}

/// Path from an environment override, if the variable is set and non-empty.
pub fn env_override(var: &str) -> Option<PathBuf> {
    env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
