/// Window and context parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// (major, minor) of the requested core profile context
    pub gl_version: (u8, u8),
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hello World".to_string(),
            width: 640,
            height: 480,
            gl_version: (3, 3),
        }
    }
}

/// How the resource builder reacts to shader and program problems.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// Compile failures are logged and ignored, link status and attribute
    /// lookup are not checked.
    #[default]
    Lenient,
    /// Compile failure, link failure and a missing `position` attribute
    /// abort the build with an error.
    Strict,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceneConfig {
    pub strictness: Strictness,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window() {
        let cfg = WindowConfig::default();
        assert_eq!(cfg.title, "Hello World");
        assert_eq!((cfg.width, cfg.height), (640, 480));
        assert_eq!(cfg.gl_version, (3, 3));
    }

    #[test]
    fn lenient_by_default() {
        assert_eq!(SceneConfig::default().strictness, Strictness::Lenient);
    }
}
