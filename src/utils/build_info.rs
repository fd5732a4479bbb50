/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

/// CLI semantic version derived from the crate metadata.
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: CLI_VERSION,
        git_hash: option_env!("TODO_CORE_BUILD_HASH").unwrap_or("unknown"),
        git_status: option_env!("TODO_CORE_BUILD_STATUS").unwrap_or("unknown"),
        timestamp: option_env!("TODO_CORE_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("TODO_CORE_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("TODO_CORE_BUILD_PROFILE").unwrap_or("unknown"),
        rustc: option_env!("TODO_CORE_BUILD_RUSTC").unwrap_or("unknown"),
    }
}

impl BuildMetadata {
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Todo Core version {}", self.version),
            format!("  Commit:  {} ({})", self.git_hash, self.git_status),
            format!("  Built:   {}", self.timestamp),
            format!("  Target:  {} [{}]", self.target, self.profile),
            format!("  Rustc:   {}", self.rustc),
        ]
    }
}
