use crate::domain::model::Component;

/// 掛在某個路由上的靜態畫面
pub trait View: Send + Sync {
    /// 不含前後 `/` 的路由，根路由為 `""`
    fn route(&self) -> &'static str;
    fn title(&self) -> &str;
    fn render(&self) -> Component;
}
