use std::path::PathBuf;

/// Trailing directories of the BuilderIcons mod tree, shared by every
/// launcher layout.
pub const MOD_ROOT_SEGMENTS: [&str; 6] = [
    "ExtraContent",
    "LuaPackages",
    "Packages",
    "_Index",
    "BuilderIcons",
    "BuilderIcons",
];

/// A third-party Roblox launcher that loads replacement assets from a known
/// mod directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Bootstrapper {
    Bloxstrap,
    Fishstrap,
    Froststrap,
    Luczystrap,
    Lunastrap,
    /// The Linux flatpak launcher.
    Sober,
}

impl Bootstrapper {
    /// The bootstrapper assumed when none is given on the command line.
    pub fn default_for_platform() -> Option<Self> {
        if cfg!(target_os = "linux") {
            Some(Self::Sober)
        } else {
            None
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Bloxstrap => "Bloxstrap",
            Self::Fishstrap => "Fishstrap",
            Self::Froststrap => "Froststrap",
            Self::Luczystrap => "Luczystrap",
            Self::Lunastrap => "Lunastrap",
            Self::Sober => "Sober",
        }
    }

    /// Where the launcher picks up asset overrides, or `None` when the
    /// launcher doesn't exist on the current platform.
    fn overlay_dir(self, mod_name: Option<&str>) -> Option<PathBuf> {
        match self {
            Self::Sober => {
                if !cfg!(target_os = "linux") {
                    return None;
                }

                let mut overlay = dirs::home_dir()?;
                overlay.extend([".var", "app", "org.vinegarhq.Sober", "data", "sober"]);
                overlay.push("asset_overlay");
                Some(overlay)
            }
            _ => {
                if !cfg!(windows) {
                    return None;
                }

                let local_appdata = std::env::var_os("LOCALAPPDATA")?;
                let mut overlay = PathBuf::from(local_appdata)
                    .join(self.name())
                    .join("Modifications");

                // Froststrap keeps each mod in its own profile subfolder
                if self == Self::Froststrap
                    && let Some(mod_name) = mod_name
                {
                    overlay.push(mod_name);
                }

                Some(overlay)
            }
        }
    }

    /// Root of the BuilderIcons mod tree, where the manifest lands.
    pub fn mod_root(self, mod_name: Option<&str>) -> Option<PathBuf> {
        let mut root = self.overlay_dir(mod_name)?;
        root.extend(MOD_ROOT_SEGMENTS);
        Some(root)
    }

    /// Directory the recolored fonts get copied into.
    pub fn font_dir(self, mod_name: Option<&str>) -> Option<PathBuf> {
        Some(self.mod_root(mod_name)?.join("Font"))
    }
}
