//! Daily plan handlers: today's words and the review list

use crate::DeutschDailyHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl DeutschDailyHandler {
    /// Show today's words with completion marks, followed by the review words
    pub async fn handle_today(&self) -> McpResult<String> {
        let (data, today, events) = self.open_day();
        let output = formatting::format_today(&data, &self.catalog, today);
        self.commit(data, events)?;
        Ok(output)
    }

    /// Show the words completed on the previous study day
    pub async fn handle_review(&self) -> McpResult<String> {
        let (data, _, events) = self.open_day();
        let output = formatting::format_review(&data, &self.catalog);
        self.commit(data, events)?;
        Ok(output)
    }
}
