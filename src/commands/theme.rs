use console::Style;
use dialoguer::theme::ColorfulTheme;

/// Prompt theme shared by interactive selections.
pub(crate) fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        active_item_style: Style::new().cyan(),
        ..ColorfulTheme::default()
    }
}
