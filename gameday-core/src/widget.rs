//! Guild widget types.
//!
//! Shape of the `GET /guilds/{guild_id}/widget.json` response. The fetch
//! itself lives in gameday-cli; this crate only owns the wire types.

use serde::{Deserialize, Serialize};

/// Live guild metadata from the widget endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildWidget {
    pub id: String,
    pub name: String,
    /// Invite URL; absent when the guild has no instant invite configured.
    pub instant_invite: Option<String>,
    pub members: Vec<Member>,
    pub presence_count: u32,
}

/// A member as reported by the widget endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub username: String,
    pub avatar_url: Option<String>,
    /// Presence status: "online", "idle" or "dnd".
    pub status: String,
}
