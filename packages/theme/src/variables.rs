//! The variable graph carried by a theme.

use crate::accessor::AccessorRegistry;
use crate::extractor::{CssVariables, VariableSource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaletteVariables {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub success: Option<String>,
    pub danger: Option<String>,
    pub warning: Option<String>,
    pub info: Option<String>,
    pub light: Option<String>,
    pub dark: Option<String>,
    pub background: Option<String>,
    pub foreground: Option<String>,
    /// Written to `--link-color` for third-party widgets that read it
    pub link: Option<String>,
}

css_variables!(PaletteVariables {
    primary => "primary",
    secondary => "secondary",
    success => "success",
    danger => "danger",
    warning => "warning",
    info => "info",
    light => "light",
    dark => "dark",
    background => "background",
    foreground => "foreground",
    link => var "--link-color",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyVariables {
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub line_height: Option<String>,
    pub radius: Option<String>,
    pub spacing: Option<String>,
}

css_variables!(TypographyVariables {
    font_family => "font",
    font_size => "text",
    line_height => "leading",
    radius => "radius",
    spacing => "spacing",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardVariables {
    pub background: Option<String>,
    pub border_color: Option<String>,
    pub radius: Option<String>,
    pub padding: Option<String>,
}

css_variables!(CardVariables {
    background => "card-bg",
    border_color => "card-border-color",
    radius => "card-radius",
    padding => "card-padding",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonVariables {
    pub background: Option<String>,
    pub color: Option<String>,
    pub radius: Option<String>,
    pub padding_x: Option<String>,
    pub padding_y: Option<String>,
}

css_variables!(ButtonVariables {
    background => "button-bg",
    color => "button-color",
    radius => "button-radius",
    padding_x => "button-padding-x",
    padding_y => "button-padding-y",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputVariables {
    pub background: Option<String>,
    pub border_color: Option<String>,
    pub focus_color: Option<String>,
}

css_variables!(InputVariables {
    background => "input-bg",
    border_color => "input-border-color",
    focus_color => "input-focus-color",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavBarVariables {
    pub background: Option<String>,
    pub color: Option<String>,
    pub height: Option<String>,
}

css_variables!(NavBarVariables {
    background => "navbar-bg",
    color => "navbar-color",
    height => "navbar-height",
});

/// Per-component variable groups; carries no variables of its own
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentVariables {
    pub card: CardVariables,
    pub button: ButtonVariables,
    pub input: InputVariables,
    pub nav_bar: NavBarVariables,
}

impl CssVariables for ComponentVariables {
    fn register(_registry: &mut AccessorRegistry<Self>) {}

    fn nested(&self) -> Vec<&dyn VariableSource> {
        vec![&self.card, &self.button, &self.input, &self.nav_bar]
    }
}

/// Root of a theme's variable graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeVariables {
    pub palette: PaletteVariables,
    pub typography: TypographyVariables,
    pub components: ComponentVariables,
}

impl CssVariables for ThemeVariables {
    fn register(_registry: &mut AccessorRegistry<Self>) {}

    fn nested(&self) -> Vec<&dyn VariableSource> {
        vec![&self.palette, &self.typography, &self.components]
    }
}
