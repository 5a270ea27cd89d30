//! Widget model
//!
//! A widget is a positioned content block that belongs to one page. Its
//! `props` are free-form; the known widget types come with a default set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Widget types the editor ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetType {
    RichText,
    Image,
    Button,
    Heading,
    Spacer,
    Divider,
    WebPageInterface,
}

impl WidgetType {
    pub const ALL: [WidgetType; 7] = [
        WidgetType::RichText,
        WidgetType::Image,
        WidgetType::Button,
        WidgetType::Heading,
        WidgetType::Spacer,
        WidgetType::Divider,
        WidgetType::WebPageInterface,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RichText => "richText",
            Self::Image => "image",
            Self::Button => "button",
            Self::Heading => "heading",
            Self::Spacer => "spacer",
            Self::Divider => "divider",
            Self::WebPageInterface => "webPageInterface",
        }
    }

    /// Props a freshly inserted widget of this type starts with
    pub fn default_props(&self) -> Map<String, Value> {
        let props = match self {
            Self::RichText => json!({
                "content": "",
                "text_align": "left",
                "font_size": "base",
                "line_height": "relaxed"
            }),
            Self::Image => json!({
                "src": "",
                "alt": "",
                "width": "100%",
                "height": "auto",
                "border_radius": "none",
                "object_fit": "cover"
            }),
            Self::Button => json!({
                "label": "Button Text",
                "link": "",
                "target": "_self",
                "variant": "primary",
                "size": "md",
                "color": "#3b82f6",
                "background_color": "#3b82f6",
                "text_color": "#ffffff",
                "border_radius": "md",
                "padding": { "top": 12, "right": 24, "bottom": 12, "left": 24 }
            }),
            Self::Heading => json!({
                "level": 2,
                "text": "",
                "alignment": "left",
                "color": "#1f2937",
                "font_size": "2xl",
                "font_weight": "bold"
            }),
            Self::Spacer => json!({
                "height": 40,
                "background_color": "transparent",
                "border_style": "none"
            }),
            Self::Divider => json!({
                "style": "solid",
                "thickness": 1,
                "color": "#e5e7eb",
                "width": "100%",
                "opacity": 1
            }),
            Self::WebPageInterface => json!({
                "title": "Add magic to your components",
                "subtitle": "DESIGN SYSTEM",
                "description": "With little changes you can turn your React design system into visually editable content blocks your marketing will love.",
                "primaryButtonText": "Learn more",
                "secondaryButtonText": "Sign up",
                "primaryButtonColor": "#EC4899",
                "secondaryButtonColor": "#EC4899",
                "backgroundGradient": "linear-gradient(135deg, #FDF2F8 0%, #FFFFFF 50%, #F3E8FF 100%)",
                "imageUrl": "https://images.unsplash.com/photo-1551650975-87deedd944c3?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1470&q=80"
            }),
        };
        match props {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

impl std::str::FromStr for WidgetType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown widget type: {}", s))
    }
}

/// Four-sided spacing in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxSpacing {
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub right: i32,
    #[serde(default)]
    pub bottom: i32,
    #[serde(default)]
    pub left: i32,
}

/// Placement of a widget on its page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetLayout {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default = "default_dimension")]
    pub width: String,
    #[serde(default = "default_dimension")]
    pub height: String,
    #[serde(default = "default_margin")]
    pub margin: BoxSpacing,
    #[serde(default)]
    pub padding: BoxSpacing,
}

impl Default for WidgetLayout {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: default_dimension(),
            height: default_dimension(),
            margin: default_margin(),
            padding: BoxSpacing::default(),
        }
    }
}

fn default_dimension() -> String {
    "auto".to_string()
}

fn default_margin() -> BoxSpacing {
    BoxSpacing {
        bottom: 16,
        ..BoxSpacing::default()
    }
}

/// Content block on a page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Widget {
    #[serde(default)]
    pub id: String,
    /// Widget type name; known names are listed by [`WidgetType`]
    #[serde(rename = "type")]
    pub widget_type: String,
    pub page_id: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub props: Map<String, Value>,
    #[serde(default)]
    pub layout: WidgetLayout,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Widget {
    /// Assign a fresh id and creation timestamps. Empty props of a known
    /// type are replaced by that type's defaults.
    pub fn stamp_created(&mut self, now: DateTime<Utc>) {
        self.id = super::new_id();
        self.created_at = now;
        self.updated_at = now;
        if self.props.is_empty() {
            if let Ok(kind) = self.widget_type.parse::<WidgetType>() {
                self.props = kind.default_props();
            }
        }
    }

    /// Bind the record to `id` and refresh `updated_at`.
    pub fn stamp_updated(&mut self, id: &str, now: DateTime<Utc>) {
        self.id = id.to_string();
        self.updated_at = now;
    }
}
