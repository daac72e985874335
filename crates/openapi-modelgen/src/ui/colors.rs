use std::io::IsTerminal;

use clap::builder::styling::{Color as ClapColor, RgbColor, Style, Styles};
use comfy_table::Color as TableColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// What a piece of terminal output is, independent of how it ends up colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
  Timestamp,
  /// Loading, generating and writing messages.
  Progress,
  /// Warnings, cycle labels and the model kind column.
  Attention,
  /// Secondary detail such as cycle members and signatures.
  Detail,
  Success,
  Label,
  Value,
}

type Rgb = (u8, u8, u8);

impl Role {
  const fn rgb(self, theme: Theme) -> Rgb {
    match (self, theme) {
      (Self::Timestamp | Self::Detail | Self::Success, Theme::Dark) => (118, 166, 166),
      (Self::Timestamp, Theme::Light) => (92, 62, 38),
      (Self::Progress, Theme::Dark) => (191, 126, 4),
      (Self::Progress, Theme::Light) => (70, 42, 25),
      (Self::Attention, Theme::Dark) => (166, 84, 55),
      (Self::Attention, Theme::Light) => (211, 99, 70),
      (Self::Detail, Theme::Light) => (40, 111, 170),
      (Self::Success, Theme::Light) => (34, 142, 90),
      (Self::Label, Theme::Dark) => (217, 164, 4),
      (Self::Label, Theme::Light) => (176, 103, 66),
      (Self::Value, Theme::Dark) => (242, 211, 56),
      (Self::Value, Theme::Light) => (199, 146, 76),
    }
  }
}

/// Resolves output roles to colors for the terminal, tables and clap help.
/// Disabled colors resolve to the terminal default.
#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn rgb(&self, role: Role) -> Option<Rgb> {
    if self.enabled { Some(role.rgb(self.theme)) } else { None }
  }

  pub const fn term(&self, role: Role) -> Color {
    match self.rgb(role) {
      Some((r, g, b)) => Color::Rgb { r, g, b },
      None => Color::Reset,
    }
  }

  pub const fn table(&self, role: Role) -> TableColor {
    match self.rgb(role) {
      Some((r, g, b)) => TableColor::Rgb { r, g, b },
      None => TableColor::Reset,
    }
  }

  const fn clap(&self, role: Role) -> Option<ClapColor> {
    match self.rgb(role) {
      Some((r, g, b)) => Some(ClapColor::Rgb(RgbColor(r, g, b))),
      None => None,
    }
  }

  pub const fn clap_styles() -> Styles {
    let colors = Self::new(true, Theme::Dark);

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(colors.clap(Role::Label)))
      .usage(Style::new().bold().fg_color(colors.clap(Role::Label)))
      .literal(Style::new().fg_color(colors.clap(Role::Success)))
      .placeholder(Style::new().fg_color(colors.clap(Role::Detail)))
      .error(Style::new().bold().fg_color(colors.clap(Role::Attention)))
      .valid(Style::new().fg_color(colors.clap(Role::Success)))
      .invalid(Style::new().bold().fg_color(colors.clap(Role::Attention)))
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => theme_from_env(
      std::env::var("COLORFGBG").ok().as_deref(),
      std::env::var("ITERM_PROFILE").ok().as_deref(),
    ),
  }
}

/// `COLORFGBG` ends in the background palette index; 8 and up are light backgrounds.
fn theme_from_env(colorfgbg: Option<&str>, iterm_profile: Option<&str>) -> Theme {
  if let Some(background) = colorfgbg
    .and_then(|value| value.rsplit(';').next())
    .and_then(|index| index.parse::<u8>().ok())
  {
    return if background >= 8 { Theme::Light } else { Theme::Dark };
  }

  if iterm_profile.is_some_and(|profile| profile.to_lowercase().contains("light")) {
    return Theme::Light;
  }

  Theme::Dark
}
