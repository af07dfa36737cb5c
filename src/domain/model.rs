use hyper::Method;
use serde::{Deserialize, Serialize};

/// 請求中路由處理器需要的部分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub method: Method,
    pub path: String,
}

impl RouteRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// 去掉前後的 `/`，`"/"` 與 `""` 都對應根路由
    pub fn route(&self) -> &str {
        self.path.trim_matches('/')
    }

    pub fn is_read(&self) -> bool {
        self.method == Method::GET || self.method == Method::HEAD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ThemeVariant {
    Light,
    #[default]
    Dark,
}

impl ThemeVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeVariant::Light => "light",
            ThemeVariant::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub variant: ThemeVariant,
}

impl Theme {
    pub fn new(name: impl Into<String>, variant: ThemeVariant) -> Self {
        Self {
            name: name.into(),
            variant,
        }
    }

    pub fn stylesheet_path(&self) -> String {
        format!("/themes/{}/styles.css", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
    Stretch,
    Baseline,
}

impl Alignment {
    pub fn css_value(self) -> &'static str {
        match self {
            Alignment::Start => "flex-start",
            Alignment::Center => "center",
            Alignment::End => "flex-end",
            Alignment::Stretch => "stretch",
            Alignment::Baseline => "baseline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JustifyContentMode {
    #[default]
    Start,
    Center,
    End,
    Between,
    Around,
    Evenly,
}

impl JustifyContentMode {
    pub fn css_value(self) -> &'static str {
        match self {
            JustifyContentMode::Start => "flex-start",
            JustifyContentMode::Center => "center",
            JustifyContentMode::End => "flex-end",
            JustifyContentMode::Between => "space-between",
            JustifyContentMode::Around => "space-around",
            JustifyContentMode::Evenly => "space-evenly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    H1(String),
    Paragraph(String),
    VerticalLayout(VerticalLayout),
}

impl From<VerticalLayout> for Component {
    fn from(layout: VerticalLayout) -> Self {
        Component::VerticalLayout(layout)
    }
}

/// 直向排列子元件的版面，預設有間距與內距
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerticalLayout {
    pub spacing: bool,
    pub padding: bool,
    pub align_items: Alignment,
    pub justify_content: JustifyContentMode,
    pub size_full: bool,
    pub children: Vec<Component>,
}

impl Default for VerticalLayout {
    fn default() -> Self {
        Self {
            spacing: true,
            padding: true,
            align_items: Alignment::default(),
            justify_content: JustifyContentMode::default(),
            size_full: false,
            children: Vec::new(),
        }
    }
}

impl VerticalLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spacing(mut self, spacing: bool) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn padding(mut self, padding: bool) -> Self {
        self.padding = padding;
        self
    }

    pub fn align_items(mut self, alignment: Alignment) -> Self {
        self.align_items = alignment;
        self
    }

    pub fn justify_content(mut self, mode: JustifyContentMode) -> Self {
        self.justify_content = mode;
        self
    }

    pub fn size_full(mut self) -> Self {
        self.size_full = true;
        self
    }

    pub fn add(mut self, component: Component) -> Self {
        self.children.push(component);
        self
    }
}
