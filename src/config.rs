/// Window properties for a lesson, passed explicitly into [`App::build`].
///
/// The original tutorials kept these in a file-level `WINDOW_PROPS` constant;
/// here they are a plain value so nothing about a lesson's setup is
/// process-wide state.
///
/// [`App::build`]: crate::App::build
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// RGBA color the frame is cleared to before each draw.
    pub clear_color: [f32; 4],
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: String::from("glbook"),
            clear_color: [0.2, 0.3, 0.3, 1.0],
            vsync: true,
        }
    }
}

impl WindowConfig {
    /// The defaults with a lesson-specific title.
    pub fn titled(title: &str) -> Self {
        Self {
            title: String::from(title),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_match_the_tutorial_constants() {
        let config = WindowConfig::default();

        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.clear_color, [0.2, 0.3, 0.3, 1.0]);
    }

    #[test]
    fn titled_only_changes_the_title() {
        let config = WindowConfig::titled("LearnOpenGL - 1.4.1 - Textures");

        assert_eq!(config.title, "LearnOpenGL - 1.4.1 - Textures");
        assert_eq!(config.width, WindowConfig::default().width);
    }
}
