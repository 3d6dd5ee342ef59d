pub mod commands;
pub mod systems;

use chd_core::SystemProfile;

/// `value_parser` for `--system`: accepts a slug (`ps2`) or a display name.
pub fn parse_system(raw: &str) -> Result<SystemProfile, String> {
    SystemProfile::from_name(raw).ok_or_else(|| {
        let known: Vec<&str> = SystemProfile::sorted().iter().map(|p| p.slug()).collect();
        format!("unknown system '{raw}' (expected one of: {})", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_parser_accepts_slug_and_name() {
        assert_eq!(parse_system("ps2"), Ok(SystemProfile::PlayStation2));
        assert_eq!(parse_system("sega saturn"), Ok(SystemProfile::Saturn));
        let err = parse_system("n64").unwrap_err();
        assert!(err.contains("dreamcast"));
    }
}
