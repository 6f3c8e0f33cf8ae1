use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;
use serde::Serialize;

use crate::bootstrapper::MOD_ROOT_SEGMENTS;

pub const MANIFEST_FILE_NAME: &str = "BuilderIcons.json";

const ASSET_ID_PREFIX: &str =
    "rbxasset://LuaPackages/Packages/_Index/BuilderIcons/BuilderIcons/Font";

/// The font family descriptor the Roblox client reads to resolve the
/// BuilderIcons faces.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct FontFamily {
    name: &'static str,
    load_strategy: &'static str,
    faces: Vec<FontFace>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct FontFace {
    name: &'static str,
    weight: u16,
    style: &'static str,
    asset_id: String,
}

impl FontFamily {
    fn builder_icons() -> Self {
        Self {
            name: "Builder Icons",
            load_strategy: "sameFamilyOnly",
            faces: vec![
                FontFace {
                    name: "Regular",
                    weight: 400,
                    style: "normal",
                    asset_id: format!("{ASSET_ID_PREFIX}/BuilderIcons-Regular.otf"),
                },
                FontFace {
                    name: "Bold",
                    weight: 700,
                    style: "normal",
                    asset_id: format!("{ASSET_ID_PREFIX}/BuilderIcons-Filled.otf"),
                },
            ],
        }
    }
}

/// Writes `BuilderIcons.json` at the mod root.
pub async fn write(root: &Path) -> anyhow::Result<()> {
    let manifest = serde_json::to_string_pretty(&FontFamily::builder_icons())
        .context("Failed to serialize the font family manifest")?;

    let path = root.join(MANIFEST_FILE_NAME);
    tokio::fs::write(&path, manifest)
        .await
        .with_context(|| format!("Failed to write manifest at {path:?}"))?;

    info!("Wrote manifest: {path:?}");

    Ok(())
}

/// Finds the BuilderIcons mod root among `path`'s ancestors.
///
/// The ancestor must end with the fixed overlay layout, compared ignoring
/// ASCII case.
pub fn find_mod_root(path: &Path) -> Option<PathBuf> {
    path.ancestors()
        .find(|ancestor| {
            let parts: Vec<_> = ancestor
                .components()
                .filter_map(|part| part.as_os_str().to_str())
                .collect();

            parts.len() >= MOD_ROOT_SEGMENTS.len()
                && parts[parts.len() - MOD_ROOT_SEGMENTS.len()..]
                    .iter()
                    .zip(MOD_ROOT_SEGMENTS)
                    .all(|(part, segment)| part.eq_ignore_ascii_case(segment))
        })
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn family_manifest_shape() {
        let manifest = serde_json::to_value(FontFamily::builder_icons()).unwrap();

        let expected = json!({
            "name": "Builder Icons",
            "loadStrategy": "sameFamilyOnly",
            "faces": [
                {
                    "name": "Regular",
                    "weight": 400,
                    "style": "normal",
                    "assetId": "rbxasset://LuaPackages/Packages/_Index/BuilderIcons/BuilderIcons/Font/BuilderIcons-Regular.otf",
                },
                {
                    "name": "Bold",
                    "weight": 700,
                    "style": "normal",
                    "assetId": "rbxasset://LuaPackages/Packages/_Index/BuilderIcons/BuilderIcons/Font/BuilderIcons-Filled.otf",
                },
            ],
        });

        assert_eq!(manifest, expected);
    }

    #[test]
    fn find_mod_root_from_font_dir() {
        let path = Path::new(
            "overlay/ExtraContent/LuaPackages/Packages/_Index/BuilderIcons/BuilderIcons/Font",
        );
        assert_eq!(
            find_mod_root(path),
            Some(PathBuf::from(
                "overlay/ExtraContent/LuaPackages/Packages/_Index/BuilderIcons/BuilderIcons"
            ))
        );
    }

    #[test]
    fn find_mod_root_ignores_case() {
        let path = Path::new(
            "overlay/extracontent/luapackages/packages/_index/buildericons/BUILDERICONS",
        );
        assert_eq!(find_mod_root(path), Some(path.to_path_buf()));
    }

    #[test]
    fn find_mod_root_outside_overlay() {
        assert_eq!(find_mod_root(Path::new("some/random/fonts")), None);
        assert_eq!(
            find_mod_root(Path::new("ExtraContent/LuaPackages/BuilderIcons")),
            None
        );
    }
}
