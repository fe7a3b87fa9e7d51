//! Progress overview handler

use crate::DeutschDailyHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl DeutschDailyHandler {
    /// Show level, streak, totals, per-level progress, recent activity and achievements
    pub async fn handle_progress(&self) -> McpResult<String> {
        let (data, _, events) = self.open_day();
        let output = formatting::format_progress(&data, &self.catalog);
        self.commit(data, events)?;
        Ok(output)
    }
}
