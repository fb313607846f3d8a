//! Explorer configuration - fixed enumerations and presentation settings.
//!
//! Colors, shapes, and camera settings never influence graph topology; they
//! are carried through to the renderer. Every field has a default, so an
//! empty TOML document is a valid configuration.

use item_catalog::Dimension;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::cluster::ClusterStyle;
use crate::error::{ConfigError, ConfigResult};

/// Configuration for the explorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// The fixed value list clustered under the Sphere dimension.
    ///
    /// Not derived from the data: a value missing from every item simply
    /// yields no cluster.
    pub sphere_values: Vec<String>,

    /// Cluster colors per dimension.
    pub palette: Palette,

    /// Options handed to the renderer with every graph.
    pub render: RenderOptions,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            sphere_values: vec![
                "War".to_string(),
                "Everyday-life".to_string(),
                "Culture".to_string(),
            ],
            palette: Palette::default(),
            render: RenderOptions::default(),
        }
    }
}

impl ExplorerConfig {
    /// Parse a TOML configuration.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        info!(
            path = %path.display(),
            sphere_values = config.sphere_values.len(),
            "Loaded explorer config"
        );
        Ok(config)
    }
}

/// Background and border color of a cluster node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterColors {
    pub background: String,
    pub border: String,
}

impl ClusterColors {
    fn new(background: &str, border: &str) -> Self {
        Self {
            background: background.to_string(),
            border: border.to_string(),
        }
    }
}

/// Per-dimension cluster colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub sphere: ClusterColors,
    pub person: ClusterColors,
    pub period: ClusterColors,
    pub theme: ClusterColors,
    /// Label color on every cluster node.
    pub font_color: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sphere: ClusterColors::new("#d88383", "#df6060"),
            person: ClusterColors::new("#ddb874", "#d19f33"),
            period: ClusterColors::new("#a37c62", "#935a2c"),
            theme: ClusterColors::new("#e6b27b", "#ec8d2f"),
            font_color: "#000000".to_string(),
        }
    }
}

impl Palette {
    /// Colors for clusters of the given dimension.
    pub fn colors(&self, dimension: Dimension) -> &ClusterColors {
        match dimension {
            Dimension::Sphere => &self.sphere,
            Dimension::Person => &self.person,
            Dimension::Period => &self.period,
            Dimension::Theme => &self.theme,
        }
    }

    /// Complete style for a cluster node of the given dimension.
    pub fn style(&self, dimension: Dimension) -> ClusterStyle {
        let colors = self.colors(dimension);
        ClusterStyle {
            background: colors.background.clone(),
            border: colors.border.clone(),
            font_color: self.font_color.clone(),
        }
    }
}

/// Label font for item nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontOptions {
    pub face: String,
    pub size: u32,
    pub color: String,
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            face: "WDXL Lubrifont TC".to_string(),
            size: 14,
            color: "#dcdcdc".to_string(),
        }
    }
}

/// Edge colors for the idle, hovered, and highlighted states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeColors {
    pub color: String,
    pub hover: String,
    pub highlight: String,
}

impl Default for EdgeColors {
    fn default() -> Self {
        Self {
            color: "#434343".to_string(),
            hover: "#4a4a4a".to_string(),
            highlight: "#787878".to_string(),
        }
    }
}

/// Initial viewport of the rendered network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            x: 600.0,
            y: 0.0,
            scale: 0.5,
        }
    }
}

/// Everything the renderer needs besides the graph itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Item node size in renderer units.
    pub item_size: u32,
    pub item_shape: String,
    pub cluster_shape: String,
    pub border_width: u32,
    /// Physics simulation; off keeps the layout still after placement.
    pub physics: bool,
    pub smooth_edges: bool,
    pub drag_nodes: bool,
    pub drag_view: bool,
    pub zoom_view: bool,
    pub hover: bool,
    pub font: FontOptions,
    pub edges: EdgeColors,
    pub camera: Camera,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            item_size: 30,
            item_shape: "image".to_string(),
            cluster_shape: "box".to_string(),
            border_width: 2,
            physics: false,
            smooth_edges: false,
            drag_nodes: true,
            drag_view: true,
            zoom_view: true,
            hover: true,
            font: FontOptions::default(),
            edges: EdgeColors::default(),
            camera: Camera::default(),
        }
    }
}
