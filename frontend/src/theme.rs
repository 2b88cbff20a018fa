//! Light/dark theme derivation.
//!
//! The page keeps a single dark-mode flag; everything visual is derived from it
//! through [`Theme::for_mode`], which is pure and cannot fail.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Typography {
    pub h2_weight: u16,
    pub h5_weight: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub palette: Palette,
    pub typography: Typography,
}

pub const PRIMARY: &str = "#3f51b5";
pub const SECONDARY: &str = "#f50057";

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        let palette = match mode {
            ThemeMode::Light => Palette {
                primary: PRIMARY,
                secondary: SECONDARY,
                background: "#ffffff",
                paper: "#ffffff",
                text_primary: "rgba(0, 0, 0, 0.87)",
                text_secondary: "rgba(0, 0, 0, 0.6)",
            },
            ThemeMode::Dark => Palette {
                primary: PRIMARY,
                secondary: SECONDARY,
                background: "#121212",
                paper: "#1e1e1e",
                text_primary: "#ffffff",
                text_secondary: "rgba(255, 255, 255, 0.7)",
            },
        };
        Theme {
            mode,
            palette,
            typography: Typography {
                h2_weight: 700,
                h5_weight: 500,
            },
        }
    }

    /// CSS custom properties for the page stylesheet, scoped to `selector`.
    pub fn css_variables(&self, selector: &str) -> String {
        format!(
            "{selector} {{ color-scheme: {mode}; --primary: {primary}; --secondary: {secondary}; \
             --background: {background}; --paper: {paper}; --text-primary: {text_primary}; \
             --text-secondary: {text_secondary}; --h2-weight: {h2}; --h5-weight: {h5}; }}",
            selector = selector,
            mode = self.mode.as_str(),
            primary = self.palette.primary,
            secondary = self.palette.secondary,
            background = self.palette.background,
            paper = self.palette.paper,
            text_primary = self.palette.text_primary,
            text_secondary = self.palette.text_secondary,
            h2 = self.typography.h2_weight,
            h5 = self.typography.h5_weight,
        )
    }
}
