pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const REPOSITORY_URL: &str = env!("CARGO_PKG_REPOSITORY");

/// Environment variable holding an `EnvFilter` directive, e.g. `stylepanel=debug`.
pub const LOG_ENV: &str = "STYLEPANEL_LOG";

pub const APP_NAME: &str = "Style Panel";
pub const DEFAULT_TITLE: &str = "Set the parameters";

pub const MIN_WINDOW_SIZE: (f32, f32) = (1000.0, 600.0);
