use std::env;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Picks the runtime environment from the `ENV` variable, falling back to
/// the build profile.
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match env::var("ENV").as_deref() {
        Ok("production") => Environment::Production,
        Ok("development") => Environment::Development,
        _ => default_env,
    }
}
