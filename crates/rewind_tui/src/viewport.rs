//! Viewport size provider and the layout chosen from it.

use ratatui::layout::Size;
use tracing::instrument;

/// Source of the current drawing area size.
pub trait ViewportSize {
    /// Current size in terminal cells.
    fn size(&self) -> std::io::Result<Size>;
}

/// The live terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalViewport;

impl ViewportSize for TerminalViewport {
    fn size(&self) -> std::io::Result<Size> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Size::new(width, height))
    }
}

/// A fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct FixedViewport {
    width: u16,
    height: u16,
}

impl ViewportSize for FixedViewport {
    fn size(&self) -> std::io::Result<Size> {
        Ok(Size::new(self.width, self.height))
    }
}

/// Screen arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum LayoutMode {
    /// Board above the info panel, no decorative borders.
    #[strum(serialize = "compact")]
    Compact,
    /// Board beside the info panel, bordered.
    #[strum(serialize = "wide")]
    Wide,
}

impl LayoutMode {
    /// Picks the layout for `width` given the compact threshold.
    #[instrument(level = "trace")]
    pub fn for_width(width: u16, compact_width: u16) -> Self {
        if width < compact_width {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    /// Picks the layout for the provider's current size, `Wide` if it cannot be read.
    pub fn detect(viewport: &impl ViewportSize, compact_width: u16) -> Self {
        match viewport.size() {
            Ok(size) => Self::for_width(size.width, compact_width),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read viewport size");
                LayoutMode::Wide
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(LayoutMode::for_width(59, 60), LayoutMode::Compact);
        assert_eq!(LayoutMode::for_width(60, 60), LayoutMode::Wide);
    }

    #[test]
    fn test_detect_uses_provider() {
        let narrow = FixedViewport::new(40, 30);
        let wide = FixedViewport::new(120, 30);
        assert_eq!(LayoutMode::detect(&narrow, 60), LayoutMode::Compact);
        assert_eq!(LayoutMode::detect(&wide, 60), LayoutMode::Wide);
        assert_eq!(LayoutMode::Wide.to_string(), "wide");
    }
}
