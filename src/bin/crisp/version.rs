//! Build information reported by `crisp version`.

use std::fmt;

/// Version metadata, fixed at compile time.
///
/// `CRISP_GIT_COMMIT` and `CRISP_BUILD_DATE` are read from the build
/// environment, so release builds can stamp them without a build script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VersionInfo {
    pub(crate) version: &'static str,
    pub(crate) git_commit: &'static str,
    pub(crate) build_date: &'static str,
    pub(crate) platform: String,
}

impl VersionInfo {
    pub(crate) fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            git_commit: option_env!("CRISP_GIT_COMMIT").unwrap_or("unknown"),
            build_date: option_env!("CRISP_BUILD_DATE").unwrap_or("unknown"),
            platform: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Crisp linter v{}", self.version)?;
        writeln!(f, "git commit: {}", self.git_commit)?;
        writeln!(f, "build date: {}", self.build_date)?;
        write!(f, "platform:   {}", self.platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current() {
        let info = VersionInfo::current();

        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert!(!info.git_commit.is_empty());
        assert!(info.platform.contains(std::env::consts::OS));
        assert!(info
            .to_string()
            .starts_with(&format!("Crisp linter v{}\n", info.version)));
    }
}
