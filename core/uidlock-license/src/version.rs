//! Library version metadata.

/// Parses a decimal version component at compile time.
const fn parse_component(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut value = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value
}

/// Packed version: `major << 16 | minor << 8 | patch`.
pub const VERSION: u32 = (parse_component(env!("CARGO_PKG_VERSION_MAJOR")) << 16)
    | (parse_component(env!("CARGO_PKG_VERSION_MINOR")) << 8)
    | parse_component(env!("CARGO_PKG_VERSION_PATCH"));

/// Returns the packed library version.
#[must_use]
pub fn version() -> u32 {
    VERSION
}

/// Returns the library version as `major.minor.patch`.
#[must_use]
pub fn version_string() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_version_matches_string() {
        let parts: Vec<u32> = version_string()
            .split('.')
            .map(|p| p.parse().unwrap())
            .collect();
        assert_eq!(version(), (parts[0] << 16) | (parts[1] << 8) | parts[2]);
    }
}
