//! Guild widget HTTP client.

use anyhow::{Context, Result};
use gameday_core::widget::GuildWidget;

/// Build the widget URL for a guild.
fn widget_url(api_base: &str, guild_id: &str) -> String {
    format!(
        "{}/guilds/{}/widget.json",
        api_base.trim_end_matches('/'),
        guild_id
    )
}

/// Fetch live guild metadata from the widget endpoint.
///
/// One attempt, no retry: a failure here means the guild's widget is
/// disabled or the network is down, and the caller decides what to show.
pub async fn fetch_guild_widget(api_base: &str, guild_id: &str) -> Result<GuildWidget> {
    let url = widget_url(api_base, guild_id);

    let response = reqwest::get(&url)
        .await
        .with_context(|| format!("Failed to reach {url}"))?
        .error_for_status()
        .context("The server rejected the widget request")?;

    let widget = response
        .json::<GuildWidget>()
        .await
        .context("Unexpected widget response body")?;

    Ok(widget)
}
