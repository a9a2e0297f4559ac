//! Terminal rendering for gameday types.
//!
//! Extension trait that adds colored terminal rendering to gameday-core
//! types using owo_colors.

use gameday_core::appointment::Appointment;
use gameday_core::category::Category;
use gameday_core::widget::Member;
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Appointment {
    fn render(&self) -> String {
        let category = Category::find(&self.category)
            .map(|c| c.name)
            .unwrap_or("Sem categoria");

        let guild = if self.guild.name.is_empty() {
            "(no server)".dimmed().to_string()
        } else {
            self.guild.name.cyan().to_string()
        };

        format!(
            "{}  {}  {}  {}\n   {}",
            short_id(&self.id).dimmed(),
            guild,
            self.date.green(),
            category.yellow(),
            self.description
        )
    }
}

impl Render for Category {
    fn render(&self) -> String {
        format!("{}  {}", self.id.dimmed(), self.name.yellow())
    }
}

impl Render for Member {
    fn render(&self) -> String {
        let dot = match self.status.as_str() {
            "online" => "●".green().to_string(),
            "idle" => "●".yellow().to_string(),
            "dnd" => "●".red().to_string(),
            _ => "●".dimmed().to_string(),
        };
        format!("{} {}", dot, self.username)
    }
}

/// First block of a hyphenated uuid, enough to identify an appointment.
pub fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}
