//! Visual settings of the event flyer.

use std::{fmt, str::FromStr};

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Gradient {
    #[default]
    PoshTheme,
    None,
    BlueGreen,
    Radial,
    Particle,
    Glass,
    Pixels,
    NeonIsometricMaze,
    Waves,
}

/// How a background is rendered.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GradientKind {
    /// Plain CSS classes on the page background.
    Static(&'static str),
    /// An animated overlay drawn above the background.
    Dynamic(&'static str),
}

impl Gradient {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn id(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PoshTheme => "Posh Theme",
            Self::None => "None",
            Self::BlueGreen => "Blue to Green",
            Self::Radial => "Radial Gradient",
            Self::Particle => "Particle",
            Self::Glass => "Glass",
            Self::Pixels => "Pixels",
            Self::NeonIsometricMaze => "Neon Isometric Maze",
            Self::Waves => "Waves",
        }
    }

    pub fn kind(self) -> GradientKind {
        use GradientKind as K;
        match self {
            Self::PoshTheme => K::Static("bg-posh-theme"),
            Self::None => K::Static("bg-none"),
            Self::BlueGreen => K::Static("bg-blue-green"),
            Self::Radial => K::Static("bg-radial"),
            Self::Particle => K::Dynamic("overlay-particle"),
            Self::Glass => K::Dynamic("overlay-glass"),
            Self::Pixels => K::Dynamic("overlay-pixels"),
            Self::NeonIsometricMaze => K::Dynamic("overlay-neon-isometric-maze"),
            Self::Waves => K::Dynamic("overlay-waves"),
        }
    }

    pub fn is_dynamic(self) -> bool {
        matches!(self.kind(), GradientKind::Dynamic(_))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported aspect ratio: {0}")]
pub struct AspectRatioParseError(String);

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AspectRatio {
    /// 9:16
    Story,
    /// 4:5
    #[default]
    Portrait,
    /// 1:1
    Square,
}

impl AspectRatio {
    pub const ALL: [Self; 3] = [Self::Story, Self::Portrait, Self::Square];

    /// The numeric query value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Story => "0.5625",
            Self::Portrait => "0.8",
            Self::Square => "1",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Story => "9:16",
            Self::Portrait => "4:5",
            Self::Square => "1:1",
        }
    }

    pub fn width_per_height(self) -> f64 {
        match self {
            Self::Story => 9.0 / 16.0,
            Self::Portrait => 4.0 / 5.0,
            Self::Square => 1.0,
        }
    }
}

impl FromStr for AspectRatio {
    type Err = AspectRatioParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| AspectRatioParseError(s.to_owned()))?;
        Self::ALL
            .into_iter()
            .find(|r| (r.width_per_height() - value).abs() < 1e-9)
            .ok_or_else(|| AspectRatioParseError(s.to_owned()))
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete theme selection of the event view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSettings {
    /// `None` renders the default typeface.
    pub font: Option<String>,
    pub gradient: Gradient,
    pub aspect_ratio: AspectRatio,
    pub add_padding: bool,
}
