//! Interactive session over a family tree with string ids and two parents.
//!
//! Each input line is one [`Command`]. A failing command reports
//! `error: <message>` on the output and the session carries on; only a
//! failure to read input or write output ends it early.

use std::io::{self, BufRead, Write};
use std::path::Path;

use itertools::Itertools;
use kindred_core::fs;
use kindred_tree::color::ParseColorError;
use kindred_tree::{Canvas, ColorEngine, Layout, Node, Renderer, Scene, Tree, TreeError};
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::commands::{Command, HELP};
use crate::svg::SvgRenderer;

/// The tree a session edits
pub type Family = Tree<String, 2>;

/// Reply to `lca` when the nodes share no ancestor
pub const NO_COMMON_ANCESTORS: &str = "No common ancestors";

/// Errors reported by a session command
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Core(#[from] kindred_core::Error),

    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),

    #[error("missing argument {expected} for '{command}'")]
    MissingArgument {
        command: String,
        expected: &'static str,
    },

    #[error("unknown command '{0}', try 'help'")]
    UnknownCommand(String),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl SessionError {
    pub fn missing_argument(command: &str, expected: &'static str) -> Self {
        Self::MissingArgument {
            command: command.to_string(),
            expected,
        }
    }
}

/// Whether the session keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Session state: the tree, pinned colors, the color RNG and the canvas.
pub struct Session {
    tree: Family,
    colors: ColorEngine<String>,
    rng: StdRng,
    canvas: Canvas,
}

impl Session {
    #[must_use]
    pub fn new(canvas: Canvas, rng: StdRng) -> Self {
        Self {
            tree: Family::new(),
            colors: ColorEngine::new(),
            rng,
            canvas,
        }
    }

    #[must_use]
    pub const fn tree(&self) -> &Family {
        &self.tree
    }

    /// Replace the tree with the one stored at `path`.
    ///
    /// # Errors
    ///
    /// A read or parse error; the current tree is kept.
    pub fn open(&mut self, path: &Path) -> Result<(), SessionError> {
        self.tree = read_tree(path)?;
        info!(path = %path.display(), nodes = self.tree.size(), "Opened tree");
        Ok(())
    }

    /// Run one command, writing any reply to `output`.
    ///
    /// # Errors
    ///
    /// Whatever the command fails with. The session state is unchanged
    /// unless the command succeeded.
    pub fn execute(&mut self, command: Command, output: &mut impl Write) -> Result<Flow, SessionError> {
        debug!(?command, "Executing command");
        match command {
            Command::Add { id, parents } => {
                self.tree.add_node(Node::from_parts(id, parents)?)?;
            }
            Command::Open(path) => self.open(&path)?,
            Command::Save(path) => {
                fs::write(&path, self.tree.to_string())?;
                info!(path = %path.display(), "Saved tree");
            }
            Command::Print => write!(output, "{}", self.tree)?,
            Command::Render(path) => {
                let svg = self.render()?;
                match path {
                    Some(path) => {
                        fs::write(&path, svg)?;
                        info!(path = %path.display(), "Rendered tree");
                    }
                    None => writeln!(output, "{svg}")?,
                }
            }
            Command::LowestCommonAncestors(first, second) => {
                let lowest = self.tree.lowest_common_ancestors(&first, &second)?;
                if lowest.is_empty() {
                    writeln!(output, "{NO_COMMON_ANCESTORS}")?;
                } else {
                    writeln!(output, "{}", lowest.iter().join(" "))?;
                }
            }
            Command::Ancestors(id) => {
                let ancestors = self.tree.get_ancestors(&id)?;
                writeln!(output, "{}", ancestors.iter().join(" "))?;
            }
            Command::Merge(path) => {
                let other = read_tree(&path)?;
                self.tree = Tree::merge(&self.tree, &other)?;
            }
            Command::Pin { id, color } => {
                self.colors = std::mem::take(&mut self.colors).pin(id, color);
            }
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Read commands from `input` until it ends or `exit` is given.
    ///
    /// # Errors
    ///
    /// Only I/O failures on `input` or `output`; command failures are
    /// reported on `output`.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        for line in input.lines() {
            let outcome = Command::parse(&line?).and_then(|command| match command {
                Some(command) => self.execute(command, &mut output),
                None => Ok(Flow::Continue),
            });
            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(SessionError::Output(e)) => return Err(e),
                Err(e) => {
                    warn!(error = %e, "Command failed");
                    writeln!(output, "error: {e}")?;
                }
            }
        }
        output.flush()
    }

    fn render(&mut self) -> Result<String, SessionError> {
        let colors = self.colors.assign(&self.tree, &mut self.rng)?;
        let layout = Layout::compute(&self.tree, &self.canvas);
        let scene = Scene::compose(&self.tree, &layout, &colors)?;
        Ok(SvgRenderer.render(&scene, &self.canvas))
    }
}

fn read_tree(path: &Path) -> Result<Family, SessionError> {
    Ok(Family::parse(&fs::read_to_string(path)?)?)
}
