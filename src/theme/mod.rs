//! Accent-colour palettes and the client-side theme synchroniser.

mod palette;
mod storage;
mod style;
mod synchronizer;

pub use palette::*;
pub use storage::*;
pub use style::*;
pub use synchronizer::*;

/// Stylesheet for a palette. Without a mode, light values go on `:root` and
/// dark values on `.dark`.
pub fn stylesheet(palette: Palette, mode: Option<ColorMode>) -> String {
    match mode {
        Some(mode) => palette_style(palette, mode).to_css(),
        None => {
            let mut css = palette_style(palette, ColorMode::Light).to_css();
            css.push_str(&palette_style(palette, ColorMode::Dark).to_css_rule(".dark"));
            css
        }
    }
}

fn palette_style(palette: Palette, mode: ColorMode) -> RootStyle {
    let mut style = RootStyle::new();
    for (key, value) in palette.colors(mode) {
        style.set_property(&format!("--{key}"), value);
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_single_mode() {
        let css = stylesheet(Palette::Cyan, Some(ColorMode::Dark));
        assert!(css.starts_with(":root {"));
        for (key, value) in Palette::Cyan.colors(ColorMode::Dark) {
            assert!(css.contains(&format!("--{key}: {value};")));
        }
        assert!(!css.contains(".dark"));
    }

    #[test]
    fn test_stylesheet_both_modes() {
        let css = stylesheet(Palette::Emerald, None);
        assert!(css.contains(":root {"));
        assert!(css.contains(".dark {"));
    }
}
