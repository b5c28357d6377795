pub mod assets;
pub mod paths;
