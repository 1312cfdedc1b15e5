use ratatui::style::Color;

use crate::config::ColorsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Auto,
    Mono,
}

impl ColorSupport {
    pub fn from_config_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "mono" | "monochrome" | "none" => ColorSupport::Mono,
            _ => ColorSupport::Auto,
        }
    }
}

/// Honors `NO_COLOR` when the configured support is `auto`.
pub fn resolve_color_support(config: &str) -> ColorSupport {
    let parsed = ColorSupport::from_config_str(config);
    if parsed == ColorSupport::Auto && std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
    {
        return ColorSupport::Mono;
    }
    parsed
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub cpu: Color,
    pub memory: Color,
    pub pid: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub gauge_unfilled: Color,
    pub statusbar_bg: Color,
    pub pill_key_bg: Color,
    pub pill_key_fg: Color,
    pub pill_desc_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            cpu: Color::Green,
            memory: Color::Magenta,
            pid: Color::Red,
            border: Color::DarkGray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            gauge_unfilled: Color::Black,
            statusbar_bg: Color::DarkGray,
            pill_key_bg: Color::Green,
            pill_key_fg: Color::Black,
            pill_desc_fg: Color::White,
        }
    }
}

impl Theme {
    pub fn from_config(colors: &ColorsConfig, support: ColorSupport) -> Self {
        if support == ColorSupport::Mono {
            return Self::mono();
        }

        let defaults = Self::default();
        Theme {
            cpu: parse_color(&colors.cpu).unwrap_or(defaults.cpu),
            memory: parse_color(&colors.memory).unwrap_or(defaults.memory),
            pid: parse_color(&colors.pid).unwrap_or(defaults.pid),
            border: parse_color(&colors.border).unwrap_or(defaults.border),
            ..defaults
        }
    }

    pub fn mono() -> Self {
        Theme {
            cpu: Color::Reset,
            memory: Color::Reset,
            pid: Color::Reset,
            border: Color::Reset,
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            gauge_unfilled: Color::Reset,
            statusbar_bg: Color::Reset,
            pill_key_bg: Color::Reset,
            pill_key_fg: Color::Reset,
            pill_desc_fg: Color::Reset,
        }
    }
}

/// Accepts `#rrggbb` or a basic color name.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') {
        return parse_hex_color(s);
    }
    let color = match s.to_lowercase().replace(['_', '-', ' '], "").as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => return parse_hex_color(s),
    };
    Some(color)
}

fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
