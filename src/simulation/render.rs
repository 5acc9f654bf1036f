//! Renderer collaborator: draws the current generation

use crate::config::DisplayMode;
use crate::game_of_life::Grid;
use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, terminal};
use std::io::Write;
use tracing::warn;

/// Receives a read-only view of the world once per generation
pub trait Renderer {
    /// Called once before the first generation is drawn
    fn prepare(&mut self, _size: usize) -> Result<()> {
        Ok(())
    }

    fn render(&mut self, grid: &Grid, generation: u64) -> Result<()>;

    /// Called once after the converged world has been drawn
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Draws generations as glyph text on a terminal-like writer
pub struct TerminalRenderer<W: Write> {
    out: W,
    mode: DisplayMode,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, mode: DisplayMode) -> Self {
        Self { out, mode }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn prepare(&mut self, size: usize) -> Result<()> {
        if self.mode != DisplayMode::Terminal {
            return Ok(());
        }

        // One spare column and row for the cursor and the status line
        let side = u16::try_from(size + 1).unwrap_or(u16::MAX);
        if let Err(err) = execute!(self.out, terminal::SetSize(side, side.saturating_add(1))) {
            warn!(%err, "could not resize terminal window");
        }

        execute!(self.out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))
            .context("Failed to clear the terminal")?;
        Ok(())
    }

    fn render(&mut self, grid: &Grid, generation: u64) -> Result<()> {
        match self.mode {
            DisplayMode::Terminal => {
                queue!(self.out, cursor::MoveTo(0, 0)).context("Failed to move the cursor")?;
                write!(self.out, "{}", grid)?;
                queue!(self.out, terminal::Clear(terminal::ClearType::UntilNewLine))?;
                writeln!(self.out, "Generation {} ({} alive)", generation, grid.living_count())?;
            }
            DisplayMode::Scroll => {
                writeln!(self.out, "Generation {} ({} alive):", generation, grid.living_count())?;
                write!(self.out, "{}", grid)?;
                writeln!(self.out)?;
            }
        }

        self.out.flush().context("Failed to flush rendered generation")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::CellState::{Alive as A, Dead as D};

    fn sample() -> Grid {
        Grid::from_rows(vec![vec![A, D], vec![D, A]]).unwrap()
    }

    #[test]
    fn test_scroll_mode_prints_plain_frames() {
        let mut renderer = TerminalRenderer::new(Vec::new(), DisplayMode::Scroll);
        renderer.prepare(2).unwrap();
        renderer.render(&sample(), 1).unwrap();
        renderer.render(&Grid::new(2), 2).unwrap();
        renderer.finish().unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(
            output,
            "Generation 1 (2 alive):\n* \n *\n\nGeneration 2 (0 alive):\n  \n  \n\n"
        );
    }

    #[test]
    fn test_terminal_mode_repositions_cursor() {
        let mut renderer = TerminalRenderer::new(Vec::new(), DisplayMode::Terminal);
        renderer.prepare(2).unwrap();
        renderer.render(&sample(), 7).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        // Clear screen, then cursor home before the frame
        assert!(output.contains("\x1b[2J"));
        assert!(output.contains("\x1b[1;1H* \n *\n"));
        assert!(output.contains("Generation 7 (2 alive)"));
    }
}
