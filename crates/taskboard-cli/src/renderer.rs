//! Terminal rendering for the markdown produced by the core display types
//!
//! Rich output goes through a termimad skin; `--no-color` prints the markdown
//! unchanged.

use std::io::{self, Write};

use anyhow::Result;
use taskboard_core::display::OperationStatus;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    // Keep the hashes so column headings stay recognizable
                    writeln!(out, "\x1b[34m{line}\x1b[0m")?;
                } else {
                    writeln!(out, "{}", self.skin.inline(line))?;
                }
            }
        } else {
            write!(out, "{markdown}")?;
        }
        out.flush()?;
        Ok(())
    }

    /// Render a success or failure line
    pub fn status(&self, status: &OperationStatus) -> Result<()> {
        if self.rich_enabled && !status.success {
            let mut out = io::stdout().lock();
            writeln!(out, "\x1b[31m{}\x1b[0m", status.to_string().trim_end())?;
            out.flush()?;
            return Ok(());
        }
        self.render(&status.to_string())
    }

    /// Print the interactive prompt without a trailing newline
    pub fn prompt(&self) -> Result<()> {
        let mut out = io::stdout().lock();
        write!(out, "tb> ")?;
        out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
