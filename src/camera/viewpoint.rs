//! Named camera viewpoints.
//!
//! The only valid transition targets: a fixed table of eye positions, each
//! looking at the world origin. String names are parsed at the API
//! boundary; everything past it works with the closed enum.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;

use crate::error::LissaError;

/// A named camera position with implicit look-at-origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Viewpoint {
    /// Directly above the scene, looking down the Y axis.
    Top,
    /// In front of the scene on the +Z axis.
    Front,
    /// Beside the scene on the +X axis.
    Left,
    /// The canonical three-quarter view used at startup and in single
    /// view.
    Initial,
    /// Front view raised to the top height.
    FrontUpper,
}

impl Viewpoint {
    /// Every named viewpoint, in table order.
    pub const ALL: [Viewpoint; 5] = [
        Viewpoint::Top,
        Viewpoint::Front,
        Viewpoint::Left,
        Viewpoint::Initial,
        Viewpoint::FrontUpper,
    ];

    /// Eye position for this viewpoint.
    #[must_use]
    pub fn eye(self) -> Vec3 {
        match self {
            Viewpoint::Top => Vec3::new(0.0, 10.0, 0.0),
            Viewpoint::Front => Vec3::new(0.0, 0.0, 10.0),
            Viewpoint::Left => Vec3::new(10.0, 0.0, 0.0),
            Viewpoint::Initial => Vec3::new(10.0, 10.0, 10.0),
            Viewpoint::FrontUpper => Vec3::new(0.0, 10.0, 10.0),
        }
    }

    /// Up vector that keeps the look-at basis well-defined.
    ///
    /// `Top` looks straight down the Y axis, so its up vector must leave
    /// the Y axis.
    #[must_use]
    pub fn up(self) -> Vec3 {
        match self {
            Viewpoint::Top => Vec3::new(0.0, 0.0, -1.0),
            _ => Vec3::Y,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Viewpoint::Top => "top",
            Viewpoint::Front => "front",
            Viewpoint::Left => "left",
            Viewpoint::Initial => "initial",
            Viewpoint::FrontUpper => "front-upper",
        }
    }
}

impl fmt::Display for Viewpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Viewpoint {
    type Err = LissaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Viewpoint::Top),
            "front" => Ok(Viewpoint::Front),
            "left" => Ok(Viewpoint::Left),
            "initial" => Ok(Viewpoint::Initial),
            "front-upper" | "front_upper" => Ok(Viewpoint::FrontUpper),
            _ => Err(LissaError::InvalidViewpoint(s.to_owned())),
        }
    }
}
