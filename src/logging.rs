use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Respects `RUST_LOG` (standard `env_logger` filter syntax) and defaults to
/// info-level output otherwise. Subsequent calls are ignored, so every lesson
/// can call this unconditionally at the top of `main`.
pub fn init() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    });
}
