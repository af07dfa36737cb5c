use crate::domain::model::{Alignment, Component, JustifyContentMode, VerticalLayout};
use crate::domain::ports::View;

pub const TITLE: &str = "Universo Platformo";
pub const DESCRIPTION: &str =
    "Welcome to Universo Platformo - A comprehensive platform built with Vaadin and Spring";

/// Main landing view, mounted at the root route.
#[derive(Debug, Clone, Copy, Default)]
pub struct MainView;

impl View for MainView {
    fn route(&self) -> &'static str {
        ""
    }

    fn title(&self) -> &str {
        TITLE
    }

    fn render(&self) -> Component {
        VerticalLayout::new()
            .spacing(true)
            .padding(true)
            .align_items(Alignment::Center)
            .justify_content(JustifyContentMode::Center)
            .size_full()
            .add(Component::H1(TITLE.to_string()))
            .add(Component::Paragraph(DESCRIPTION.to_string()))
            .into()
    }
}
