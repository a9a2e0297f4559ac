use anyhow::{Context, Result};
use dialoguer::{Confirm, Input, Select};
use gameday_core::appointment::Guild;
use gameday_core::category::Category;
use gameday_core::form::FormSession;
use gameday_core::store::AppointmentStore;
use owo_colors::OwoColorize;

use crate::render::short_id;

/// The input surface caps descriptions, not the storage layer.
const DESCRIPTION_LIMIT: usize = 100;

pub fn run(store: &AppointmentStore) -> Result<()> {
    let mut session = FormSession::new();

    // --- Server ---
    let guild_name: String = Input::new()
        .with_prompt("  Server name")
        .interact_text()?;
    let guild_id: String = Input::new()
        .with_prompt("  Server id")
        .interact_text()?;
    let owner = Confirm::new()
        .with_prompt("  Do you own this server?")
        .default(false)
        .interact()?;

    session.select_guild(Guild {
        id: guild_id,
        name: guild_name,
        icon: None,
        owner,
    });

    // --- Category ---
    let mut items: Vec<&str> = Category::all().iter().map(|c| c.name).collect();
    items.push("No category");
    let selection = Select::new()
        .with_prompt("  Category")
        .items(&items)
        .default(0)
        .interact()?;
    if let Some(category) = Category::all().get(selection) {
        session.toggle_category(category.id);
    }

    // --- Date ---
    session.set_day(prompt("  Day")?);
    session.set_month(prompt("  Month")?);
    session.set_hour(prompt("  Hour")?);
    session.set_minute(prompt("  Minute")?);

    // --- Description ---
    let description: String = Input::new()
        .with_prompt(format!("  Description (max {DESCRIPTION_LIMIT} characters)"))
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    session.set_description(truncate_description(&description));

    let appointment = session.commit();
    store
        .append(appointment.clone())
        .context("Could not save the appointment")?;

    println!();
    println!(
        "{}",
        format!(
            "  Scheduled: {} on {} ({})",
            appointment.date,
            appointment.guild.name,
            short_id(&appointment.id)
        )
        .green()
    );

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    Ok(Input::<String>::new().with_prompt(label).interact_text()?)
}

/// Cap a description at the input-surface limit, on a char boundary.
fn truncate_description(input: &str) -> String {
    input.chars().take(DESCRIPTION_LIMIT).collect()
}
