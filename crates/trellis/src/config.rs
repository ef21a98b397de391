//! Declarative configuration, read from TOML.
//!
//! ```toml
//! [layout]
//! orientation = "column"
//! gap = 1
//! main_align = "center"
//!
//! [theme]
//! border = "double"
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result, Theme,
    geom::Axis,
    layout::{Align, CrossAlign},
};

/// The direction a layout stacks its panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Side by side, left to right.
    #[default]
    Row,
    /// Top to bottom.
    Column,
}

impl From<Orientation> for Axis {
    fn from(o: Orientation) -> Self {
        match o {
            Orientation::Row => Self::Horizontal,
            Orientation::Column => Self::Vertical,
        }
    }
}

impl From<Axis> for Orientation {
    fn from(a: Axis) -> Self {
        match a {
            Axis::Horizontal => Self::Row,
            Axis::Vertical => Self::Column,
        }
    }
}

/// Initial parameters for a [`Layout`](crate::Layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Stacking direction.
    pub orientation: Orientation,
    /// Cells between adjacent panes. Negative values are treated as zero.
    pub gap: i32,
    /// Main-axis distribution of leftover space.
    pub main_align: Align,
    /// Cross-axis placement.
    pub cross_align: CrossAlign,
}

/// Top-level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root layout parameters.
    pub layout: LayoutConfig,
    /// Border styles.
    pub theme: Theme,
}

impl Config {
    /// Parse configuration from a TOML string. Missing fields take their
    /// defaults; unknown fields are an error.
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        Self::from_toml(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BorderStyle, Error};

    #[test]
    fn empty_is_default() -> Result<()> {
        assert_eq!(Config::from_toml("")?, Config::default());
        Ok(())
    }

    #[test]
    fn parse() -> Result<()> {
        let c = Config::from_toml(
            r#"
            [layout]
            orientation = "column"
            gap = 2
            main_align = "end"
            cross_align = "center"

            [theme]
            border = "double"
            "#,
        )?;
        assert_eq!(c.layout.orientation, Orientation::Column);
        assert_eq!(c.layout.gap, 2);
        assert_eq!(c.layout.main_align, Align::End);
        assert_eq!(c.layout.cross_align, CrossAlign::Center);
        assert_eq!(c.theme.border, BorderStyle::Double);
        assert_eq!(c.theme.border_focused, BorderStyle::Thick);
        Ok(())
    }

    #[test]
    fn unknown_fields_rejected() {
        let e = Config::from_toml("[layout]\nspacing = 3\n");
        assert!(matches!(e, Err(Error::Config(_))));
        let e = Config::from_toml("[layout]\norientation = \"diagonal\"\n");
        assert!(matches!(e, Err(Error::Config(_))));
    }

    #[test]
    fn missing_file() {
        let e = Config::load("/nonexistent/trellis.toml");
        assert!(matches!(e, Err(Error::Io(_))));
    }

    #[test]
    fn orientation_axis() {
        assert_eq!(Axis::from(Orientation::Row), Axis::Horizontal);
        assert_eq!(Orientation::from(Axis::Vertical), Orientation::Column);
    }
}
