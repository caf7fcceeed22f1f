//! Runtime mode flags.

/// How the process is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeMode {
    /// Development mode: canonical URLs are not emitted.
    pub dev: bool,

    /// Rendering inside the request-serving environment.
    /// When false, the inspect hook receives each page view.
    pub server: bool,
}

impl RuntimeMode {
    /// Production mode: canonical URLs, no inspection.
    pub const PRODUCTION: Self = Self {
        dev: false,
        server: true,
    };

    /// Development mode: no canonical URLs.
    pub const DEVELOPMENT: Self = Self {
        dev: true,
        server: true,
    };

    #[inline]
    pub const fn is_dev(&self) -> bool {
        self.dev
    }

    #[inline]
    pub const fn is_server(&self) -> bool {
        self.server
    }

    /// Same mode with inspection enabled (not serving).
    pub const fn inspecting(self) -> Self {
        Self {
            server: false,
            ..self
        }
    }
}

impl Default for RuntimeMode {
    fn default() -> Self {
        Self::PRODUCTION
    }
}
