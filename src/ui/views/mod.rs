pub mod main_view;

pub use main_view::MainView;

use crate::domain::ports::View;

/// 依路由找畫面的註冊表
#[derive(Default)]
pub struct ViewRegistry {
    views: Vec<Box<dyn View>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 所有內建畫面
    pub fn with_builtin_views() -> Self {
        let mut registry = Self::new();
        registry.register(MainView);
        registry
    }

    /// 同一路由重複註冊時，後註冊者取代前者
    pub fn register<V: View + 'static>(&mut self, view: V) {
        self.views.retain(|existing| existing.route() != view.route());
        self.views.push(Box::new(view));
    }

    pub fn resolve(&self, route: &str) -> Option<&dyn View> {
        self.views
            .iter()
            .find(|view| view.route() == route)
            .map(|view| view.as_ref())
    }

    pub fn routes(&self) -> Vec<&'static str> {
        self.views.iter().map(|view| view.route()).collect()
    }
}
