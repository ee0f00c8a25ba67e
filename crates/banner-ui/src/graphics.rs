/// Terminal graphics backend for the banner preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsBackend {
    /// iTerm2 inline image protocol (also understood by WezTerm).
    ITerm2,
    /// Unicode half-block character fallback (works everywhere).
    UnicodeBlock,
}

/// Detect the best available graphics backend.
///
/// `BANNER_GRAPHICS` (`iterm2` or `unicode`) wins; otherwise `TERM_PROGRAM`
/// is probed for terminals that speak the iTerm2 protocol. Half-blocks are
/// the safe default.
pub fn detect_backend() -> GraphicsBackend {
    if let Ok(val) = std::env::var("BANNER_GRAPHICS") {
        match val.to_lowercase().as_str() {
            "iterm2" => return GraphicsBackend::ITerm2,
            "unicode" => return GraphicsBackend::UnicodeBlock,
            _ => {} // invalid value falls through to auto-detection
        }
    }

    match std::env::var("TERM_PROGRAM").as_deref() {
        Ok("iTerm.app") => GraphicsBackend::ITerm2,
        Ok("WezTerm") => GraphicsBackend::ITerm2,
        _ => GraphicsBackend::UnicodeBlock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serialize access to process-global env vars to prevent test races
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env(graphics: Option<&str>, term_program: Option<&str>, check: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap();
        let saved_graphics = std::env::var("BANNER_GRAPHICS").ok();
        let saved_term = std::env::var("TERM_PROGRAM").ok();

        match graphics {
            Some(v) => std::env::set_var("BANNER_GRAPHICS", v),
            None => std::env::remove_var("BANNER_GRAPHICS"),
        }
        match term_program {
            Some(v) => std::env::set_var("TERM_PROGRAM", v),
            None => std::env::remove_var("TERM_PROGRAM"),
        }

        check();

        match saved_graphics {
            Some(v) => std::env::set_var("BANNER_GRAPHICS", v),
            None => std::env::remove_var("BANNER_GRAPHICS"),
        }
        match saved_term {
            Some(v) => std::env::set_var("TERM_PROGRAM", v),
            None => std::env::remove_var("TERM_PROGRAM"),
        }
    }

    #[test]
    fn default_is_unicode_block() {
        with_env(None, None, || {
            assert_eq!(detect_backend(), GraphicsBackend::UnicodeBlock);
        });
    }

    #[test]
    fn env_override_wins_over_term_program() {
        with_env(Some("unicode"), Some("iTerm.app"), || {
            assert_eq!(detect_backend(), GraphicsBackend::UnicodeBlock);
        });
        with_env(Some("iterm2"), None, || {
            assert_eq!(detect_backend(), GraphicsBackend::ITerm2);
        });
    }

    #[test]
    fn iterm_and_wezterm_are_detected() {
        with_env(None, Some("iTerm.app"), || {
            assert_eq!(detect_backend(), GraphicsBackend::ITerm2);
        });
        with_env(None, Some("WezTerm"), || {
            assert_eq!(detect_backend(), GraphicsBackend::ITerm2);
        });
    }

    #[test]
    fn invalid_override_falls_through() {
        with_env(Some("sixel"), None, || {
            assert_eq!(detect_backend(), GraphicsBackend::UnicodeBlock);
        });
    }
}
