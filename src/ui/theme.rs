use crate::domain::model::Theme;

// 色彩變數沿用 Lumo 的命名，深色版本掛在 html[theme~="dark"]
const LIGHT_PALETTE: &str = r#"html {
  --lumo-base-color: #ffffff;
  --lumo-body-text-color: hsla(214, 40%, 16%, 0.94);
  --lumo-header-text-color: hsl(214, 35%, 15%);
  --lumo-secondary-text-color: hsla(214, 42%, 18%, 0.69);
  --lumo-primary-color: hsl(214, 100%, 48%);
  --lumo-font-family: -apple-system, BlinkMacSystemFont, "Roboto", "Segoe UI", Helvetica, Arial, sans-serif;
  --lumo-space-m: 1rem;
  --lumo-space-l: 1.5rem;
}
"#;

const DARK_PALETTE: &str = r#"html[theme~="dark"] {
  --lumo-base-color: hsl(214, 35%, 21%);
  --lumo-body-text-color: hsla(214, 96%, 96%, 0.9);
  --lumo-header-text-color: hsl(214, 100%, 98%);
  --lumo-secondary-text-color: hsla(214, 87%, 92%, 0.69);
  --lumo-primary-color: hsl(214, 90%, 48%);
}
"#;

const LAYOUT_RULES: &str = r#"html, body {
  height: 100%;
  margin: 0;
  background-color: var(--lumo-base-color);
  color: var(--lumo-body-text-color);
  font-family: var(--lumo-font-family);
}
h1 {
  color: var(--lumo-header-text-color);
}
.vertical-layout {
  display: flex;
  flex-direction: column;
  box-sizing: border-box;
}
.vertical-layout[theme~="padding"] {
  padding: var(--lumo-space-l);
}
.vertical-layout[theme~="spacing"] {
  gap: var(--lumo-space-m);
}
"#;

/// 主題樣式表，兩種配色都輸出，由 html 的 theme 屬性切換
pub fn stylesheet(theme: &Theme) -> String {
    format!(
        "/* theme: {} */\n{}{}{}",
        theme.name, LIGHT_PALETTE, DARK_PALETTE, LAYOUT_RULES
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ThemeVariant;

    #[test]
    fn test_stylesheet_contains_both_palettes() {
        let css = stylesheet(&Theme::new("universo", ThemeVariant::Light));
        assert!(css.starts_with("/* theme: universo */"));
        assert!(css.contains("html[theme~=\"dark\"]"));
        assert!(css.contains(".vertical-layout[theme~=\"spacing\"]"));
    }
}
