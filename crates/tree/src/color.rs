//! # Color inheritance
//!
//! Roots get a random RGB color. Every other node gets the channel-wise
//! average of its parents' colors and one fresh random sample, so with `N`
//! parents each channel is averaged over `N + 1` values. The random sample
//! keeps descendants from converging to a single color.
//!
//! Colors are assigned in topological order, so each parent's color is
//! final before any of its children is blended. The random source is
//! injected, which makes the assignment reproducible with a seeded RNG.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::{NodeId, Tree, TreeError, TreeResult};

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// RGB color with an opacity in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

/// Any color a renderer can draw with
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Color {
    #[default]
    None,
    Named(String),
    Rgb(Rgb),
    Rgba(Rgba),
}

impl Color {
    /// The plain RGB value, if this is one
    #[must_use]
    pub const fn as_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Rgb(rgb) => Some(*rgb),
            _ => None,
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Named(name) => write!(f, "{name}"),
            Self::Rgb(Rgb { red, green, blue }) => write!(f, "rgb({red},{green},{blue})"),
            Self::Rgba(Rgba {
                red,
                green,
                blue,
                alpha,
            }) => write!(f, "rgba({red},{green},{blue},{alpha})"),
        }
    }
}

/// Error parsing a [`Color`] from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}': expected none, a name, rgb(r,g,b) or rgba(r,g,b,a)")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || ParseColorError(text.to_string());

        if text.is_empty() {
            return Err(invalid());
        }
        if text.eq_ignore_ascii_case("none") {
            return Ok(Self::None);
        }
        if let Some(body) = functional_body(text, "rgba") {
            let [red, green, blue, alpha] = split_args::<4>(body).ok_or_else(invalid)?;
            let channel = |arg: &str| arg.parse::<u8>().map_err(|_| invalid());
            let alpha = alpha.parse::<f64>().map_err(|_| invalid())?;
            if !(0.0..=1.0).contains(&alpha) {
                return Err(invalid());
            }
            return Ok(Self::Rgba(Rgba {
                red: channel(red)?,
                green: channel(green)?,
                blue: channel(blue)?,
                alpha,
            }));
        }
        if let Some(body) = functional_body(text, "rgb") {
            let channels = split_args::<3>(body).ok_or_else(invalid)?;
            let [red, green, blue] = channels.map(|arg| arg.parse::<u8>().ok());
            return match (red, green, blue) {
                (Some(red), Some(green), Some(blue)) => Ok(Self::Rgb(Rgb::new(red, green, blue))),
                _ => Err(invalid()),
            };
        }
        if text.chars().all(|c| c.is_ascii_alphanumeric() || c == '#') {
            return Ok(Self::Named(text.to_string()));
        }
        Err(invalid())
    }
}

fn functional_body<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    text.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn split_args<const K: usize>(body: &str) -> Option<[&str; K]> {
    let args: Vec<&str> = body.split(',').map(str::trim).collect();
    <[&str; K]>::try_from(args).ok()
}

/// Colors assigned to every node
pub type ColorMap<I> = im::HashMap<I, Color>;

/// A fresh random RGB color
pub fn random_rgb<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(
        rng.gen_range(0..=u8::MAX),
        rng.gen_range(0..=u8::MAX),
        rng.gen_range(0..=u8::MAX),
    )
}

/// Channel-wise integer average of `parents` and `sample`.
#[must_use]
pub fn blend(parents: &[Rgb], sample: Rgb) -> Rgb {
    let count = u32::try_from(parents.len() + 1).unwrap_or(u32::MAX);
    let average = |channel: fn(&Rgb) -> u8| {
        let sum: u32 = parents
            .iter()
            .chain(std::iter::once(&sample))
            .map(|rgb| u32::from(channel(rgb)))
            .sum();
        u8::try_from(sum / count).unwrap_or(u8::MAX)
    };
    Rgb::new(
        average(|rgb| rgb.red),
        average(|rgb| rgb.green),
        average(|rgb| rgb.blue),
    )
}

/// Derives inherited colors for a tree.
///
/// Pinned colors are used verbatim for their nodes instead of being
/// generated or blended. Only RGB colors can be blended into children.
#[derive(Debug, Clone)]
pub struct ColorEngine<I> {
    pinned: HashMap<I, Color>,
}

impl<I: NodeId> Default for ColorEngine<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: NodeId> ColorEngine<I> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pinned: HashMap::new(),
        }
    }

    /// Fix the color of `id`.
    #[must_use]
    pub fn pin(mut self, id: I, color: Color) -> Self {
        self.pinned.insert(id, color);
        self
    }

    #[must_use]
    pub fn pinned(&self, id: &I) -> Option<&Color> {
        self.pinned.get(id)
    }

    /// Assign a color to every node of `tree`.
    ///
    /// # Errors
    ///
    /// [`TreeError::NonRgbColorBlend`] if a parent's color is not plain RGB
    /// (only possible through a pinned color).
    pub fn assign<R, const N: usize>(&self, tree: &Tree<I, N>, rng: &mut R) -> TreeResult<ColorMap<I>>
    where
        R: Rng + ?Sized,
    {
        let mut colors = ColorMap::new();

        for id in tree.topological_order() {
            let node = tree.node(id)?;
            let color = if let Some(pinned) = self.pinned.get(id) {
                pinned.clone()
            } else if node.is_root() {
                Color::Rgb(random_rgb(rng))
            } else {
                let parents = node
                    .parents()
                    .map(|parent| {
                        colors
                            .get(parent)
                            .and_then(Color::as_rgb)
                            .ok_or_else(|| TreeError::non_rgb_color_blend(id, parent))
                    })
                    .collect::<TreeResult<Vec<Rgb>>>()?;
                Color::Rgb(blend(&parents, random_rgb(rng)))
            };
            debug!(node = %id, color = %color, "Assigned color");
            colors.insert(id.clone(), color);
        }

        Ok(colors)
    }
}
