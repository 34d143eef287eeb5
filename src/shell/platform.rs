//! Platform and CI environment detection.

/// Describe the running platform as `"<os> <arch>"` (e.g. `linux x86_64`).
pub fn platform_descriptor() -> String {
    format!("{} {}", std::env::consts::OS, std::env::consts::ARCH)
}

/// Check if running in a CI environment.
///
/// Used to force the non-interactive UI in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    is_ci_with_env(|key| std::env::var(key).ok())
}

/// CI detection against a custom env var lookup.
pub fn is_ci_with_env<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    const CI_VARS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "CIRCLECI",
        "TRAVIS",
        "JENKINS_URL",
    ];
    CI_VARS.iter().any(|var| env_fn(var).is_some())
}
