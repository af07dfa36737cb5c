use crate::domain::model::{Theme, ThemeVariant};
use crate::domain::ports::View;
use crate::ui::render::{escape_html, render};

/// 包住每個畫面的 HTML 文件，負責主題與樣式表
#[derive(Debug, Clone)]
pub struct AppShell {
    theme: Theme,
}

impl AppShell {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn render_page(&self, view: &dyn View) -> String {
        self.document(view.title(), &render(&view.render()))
    }

    pub fn document(&self, title: &str, body: &str) -> String {
        let theme_attribute = match self.theme.variant {
            ThemeVariant::Dark => " theme=\"dark\"",
            ThemeVariant::Light => "",
        };

        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\"{theme_attribute}>\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{title}</title>\n\
             <link rel=\"stylesheet\" href=\"{stylesheet}\">\n\
             </head>\n\
             <body>{body}</body>\n\
             </html>\n",
            theme_attribute = theme_attribute,
            title = escape_html(title),
            stylesheet = escape_html(&self.theme.stylesheet_path()),
            body = body,
        )
    }
}
