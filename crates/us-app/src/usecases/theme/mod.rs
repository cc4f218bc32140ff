mod set_dark_theme_config;
mod set_theme_brand;

pub use set_dark_theme_config::SetDarkThemeConfig;
pub use set_theme_brand::SetThemeBrand;
