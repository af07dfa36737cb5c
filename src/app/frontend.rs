use crate::config::Settings;
use crate::core::application::Application;
use crate::core::http::{self, HttpResponse};
use crate::core::server::ApplicationServer;
use crate::domain::model::{RouteRequest, Theme};
use crate::ui::render::escape_html;
use crate::ui::shell::AppShell;
use crate::ui::theme;
use crate::ui::views::ViewRegistry;
use crate::utils::error::Result;
use async_trait::async_trait;
use hyper::StatusCode;

/// Core frontend application: serves the themed shell and its views.
pub struct CoreFrontendApplication {
    shell: AppShell,
    views: ViewRegistry,
}

impl CoreFrontendApplication {
    pub fn new(theme: Theme) -> Self {
        Self::with_views(theme, ViewRegistry::with_builtin_views())
    }

    pub fn with_views(theme: Theme, views: ViewRegistry) -> Self {
        Self {
            shell: AppShell::new(theme),
            views,
        }
    }

    fn stylesheet_route(&self) -> String {
        self.shell.theme().stylesheet_path().trim_matches('/').to_string()
    }

    fn not_found(&self, request: &RouteRequest) -> Result<HttpResponse> {
        let routes = self
            .views
            .routes()
            .into_iter()
            .map(|route| format!("<li>/{}</li>", escape_html(route)))
            .collect::<String>();

        let body = format!(
            "<h1>Could not navigate to '{}'</h1><p>Available routes:</p><ul>{}</ul>",
            escape_html(request.route()),
            routes
        );

        http::html(StatusCode::NOT_FOUND, self.shell.document("Route not found", &body))
    }
}

#[async_trait]
impl Application for CoreFrontendApplication {
    fn name(&self) -> &str {
        "CoreFrontendApplication"
    }

    async fn handle(&self, request: &RouteRequest) -> Result<HttpResponse> {
        if !request.is_read() {
            let response = http::html(
                StatusCode::METHOD_NOT_ALLOWED,
                self.shell.document("Method not allowed", "<h1>Method not allowed</h1>"),
            )?;
            return Ok(http::with_allow(response, "GET, HEAD"));
        }

        let route = request.route();

        if let Some(view) = self.views.resolve(route) {
            tracing::debug!("Rendering view for route '{}'", route);
            return http::html(StatusCode::OK, self.shell.render_page(view));
        }

        if route == self.stylesheet_route() {
            return http::css(theme::stylesheet(self.shell.theme()));
        }

        self.not_found(request)
    }
}

/// Frontend bootstrap: bind and serve the themed shell until ctrl-c.
pub async fn run_core_frontend(settings: &Settings) -> Result<()> {
    let application = CoreFrontendApplication::new(settings.theme.theme());
    let server = ApplicationServer::bind(application, &settings.server).await?;
    server.serve().await
}
