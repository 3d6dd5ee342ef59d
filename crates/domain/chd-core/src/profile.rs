use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::path_utils::DiscPath;

/// Target platform a disc image is converted for.
///
/// A profile decides two things: which input extensions are offered when
/// picking files or scanning a folder, and whether an ISO is written as a
/// DVD image instead of a CD image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemProfile {
    #[default]
    #[serde(rename = "ps1")]
    PlayStation,
    #[serde(rename = "ps2")]
    PlayStation2,
    Saturn,
    Dreamcast,
    MegaCd,
    NeoGeoCd,
    PcEngineCd,
    #[serde(rename = "3do")]
    ThreeDo,
    AmigaCd32,
}

impl SystemProfile {
    /// Declaration order; use [`SystemProfile::sorted`] for display.
    pub const ALL: [SystemProfile; 9] = [
        SystemProfile::PlayStation,
        SystemProfile::PlayStation2,
        SystemProfile::Saturn,
        SystemProfile::Dreamcast,
        SystemProfile::MegaCd,
        SystemProfile::NeoGeoCd,
        SystemProfile::PcEngineCd,
        SystemProfile::ThreeDo,
        SystemProfile::AmigaCd32,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SystemProfile::PlayStation => "Sony PlayStation (PS1)",
            SystemProfile::PlayStation2 => "Sony PlayStation 2 (PS2)",
            SystemProfile::Saturn => "Sega Saturn",
            SystemProfile::Dreamcast => "Sega Dreamcast",
            SystemProfile::MegaCd => "Sega / Mega CD",
            SystemProfile::NeoGeoCd => "SNK Neo Geo CD",
            SystemProfile::PcEngineCd => "NEC TurboGrafx CD / PC Engine CD",
            SystemProfile::ThreeDo => "3DO",
            SystemProfile::AmigaCd32 => "Commodore Amiga CD32",
        }
    }

    /// Short identifier used on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            SystemProfile::PlayStation => "ps1",
            SystemProfile::PlayStation2 => "ps2",
            SystemProfile::Saturn => "saturn",
            SystemProfile::Dreamcast => "dreamcast",
            SystemProfile::MegaCd => "mega-cd",
            SystemProfile::NeoGeoCd => "neo-geo-cd",
            SystemProfile::PcEngineCd => "pc-engine-cd",
            SystemProfile::ThreeDo => "3do",
            SystemProfile::AmigaCd32 => "amiga-cd32",
        }
    }

    /// Accepted input extensions, dot included, in scan order.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            SystemProfile::Dreamcast => &[".gdi", ".cue", ".cdi", ".iso"],
            _ => &[".cue", ".iso"],
        }
    }

    /// Only the PS2 ships DVD-sized ISOs that must go through `createdvd`.
    pub fn supports_dvd(self) -> bool {
        matches!(self, SystemProfile::PlayStation2)
    }

    pub fn accepts(self, path: &Path) -> bool {
        DiscPath::has_any_extension(path, self.extensions())
    }

    /// All profiles ordered by display name, as shown in the selector.
    pub fn sorted() -> Vec<SystemProfile> {
        let mut all = Self::ALL.to_vec();
        all.sort_by_key(|p| p.name());
        all
    }

    /// Resolve either a slug (`ps2`) or a display name, ignoring case.
    pub fn from_name(name: &str) -> Option<SystemProfile> {
        let needle = name.trim();
        Self::ALL.into_iter().find(|p| {
            p.slug().eq_ignore_ascii_case(needle) || p.name().eq_ignore_ascii_case(needle)
        })
    }

    /// Extensions for a free-form system name, with the generic disc list as fallback.
    pub fn extensions_for_name(name: &str) -> &'static [&'static str] {
        Self::from_name(name)
            .map(|p| p.extensions())
            .unwrap_or(chd_config::FALLBACK_EXTENSIONS)
    }
}

impl fmt::Display for SystemProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_profiles_are_alphabetical_by_name() {
        let names: Vec<&str> = SystemProfile::sorted().iter().map(|p| p.name()).collect();
        let mut expected = names.clone();
        expected.sort();
        assert_eq!(names, expected);
        assert_eq!(names.first(), Some(&"3DO"));
    }

    #[test]
    fn lookup_accepts_slug_and_display_name() {
        assert_eq!(
            SystemProfile::from_name("PS2"),
            Some(SystemProfile::PlayStation2)
        );
        assert_eq!(
            SystemProfile::from_name("sega dreamcast"),
            Some(SystemProfile::Dreamcast)
        );
        assert_eq!(SystemProfile::from_name("Atari Jaguar CD"), None);
    }

    #[test]
    fn unknown_system_falls_back_to_generic_disc_list() {
        assert_eq!(
            SystemProfile::extensions_for_name("Atari Jaguar CD"),
            &[".cue", ".gdi", ".iso"]
        );
        assert_eq!(
            SystemProfile::extensions_for_name("neo-geo-cd"),
            &[".cue", ".iso"]
        );
    }

    #[test]
    fn dreamcast_accepts_gdi_and_cdi() {
        let dc = SystemProfile::Dreamcast;
        assert!(dc.accepts(Path::new("Shenmue/disc1.GDI")));
        assert!(dc.accepts(Path::new("game.cdi")));
        assert!(!SystemProfile::Saturn.accepts(Path::new("game.gdi")));
    }

    #[test]
    fn serializes_as_slug() {
        let json = serde_json::to_string(&SystemProfile::PlayStation2).unwrap();
        assert_eq!(json, "\"ps2\"");
        let json = serde_json::to_string(&SystemProfile::NeoGeoCd).unwrap();
        assert_eq!(json, "\"neo-geo-cd\"");
    }
}
