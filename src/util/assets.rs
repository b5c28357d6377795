use std::borrow::Cow;

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

pub const CATALOG_ASSET: &str = "catalog.json";
pub const MODEL_ASSET: &str = "model_pipeline.json";

/// The reference vehicle catalog shipped with the crate.
pub fn embedded_catalog() -> Cow<'static, [u8]> {
    load_asset(CATALOG_ASSET)
}

/// The fitted price pipeline shipped with the crate.
pub fn embedded_model() -> Cow<'static, [u8]> {
    load_asset(MODEL_ASSET)
}

fn load_asset(name: &str) -> Cow<'static, [u8]> {
    EmbeddedAssets::get(name)
        .map(|file| file.data)
        .unwrap_or_else(|| panic!("Failed to locate embedded asset: {name}"))
}
