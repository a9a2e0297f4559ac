use anyhow::Result;
use gameday_core::store::AppointmentStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(store: &AppointmentStore, category: Option<&str>) -> Result<()> {
    let appointments = store.list_by_category(category.unwrap_or(""))?;

    if appointments.is_empty() {
        println!("{}", "  No sessions scheduled.".dimmed());
        println!("{}", "  Schedule one with: gameday new".dimmed());
        return Ok(());
    }

    println!();
    for appointment in &appointments {
        println!("  {}", appointment.render());
    }
    println!();
    println!("{}", format!("  Total {}", appointments.len()).dimmed());

    Ok(())
}
