//! Build configuration selecting which build output gets packaged.

use std::fmt;

/// The build configuration being packaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildConfiguration {
    /// Debug build; debug symbols ship inside the component archive.
    Debug,
    /// Release build; debug symbols ship in a separate archive.
    #[default]
    Release,
}

impl BuildConfiguration {
    /// Select the configuration from a `--debug` style flag.
    #[must_use]
    pub const fn from_debug_flag(is_debug: bool) -> Self {
        if is_debug { Self::Debug } else { Self::Release }
    }

    /// Returns `true` for [`BuildConfiguration::Debug`].
    #[must_use]
    pub const fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }

    /// Configuration name as used in build output directories.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
        }
    }

    /// Build output directory name for `platform`, e.g. `Win32_Release`.
    #[must_use]
    pub fn output_dir_name(self, platform: &str) -> String {
        format!("{platform}_{}", self.as_str())
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::debug(true, BuildConfiguration::Debug, "Win32_Debug")]
    #[case::release(false, BuildConfiguration::Release, "Win32_Release")]
    fn flag_selects_configuration_and_directory(
        #[case] flag: bool,
        #[case] expected: BuildConfiguration,
        #[case] dir: &str,
    ) {
        let configuration = BuildConfiguration::from_debug_flag(flag);
        assert_eq!(configuration, expected);
        assert_eq!(configuration.is_debug(), flag);
        assert_eq!(configuration.output_dir_name("Win32"), dir);
    }

    #[test]
    fn display_matches_directory_suffix() {
        assert_eq!(BuildConfiguration::Debug.to_string(), "Debug");
        assert_eq!(BuildConfiguration::default(), BuildConfiguration::Release);
    }
}
