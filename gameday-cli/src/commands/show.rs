use anyhow::Result;
use gameday_core::appointment::Appointment;
use gameday_core::config::GamedayConfig;
use gameday_core::store::AppointmentStore;
use owo_colors::OwoColorize;

use crate::client;
use crate::render::{Render, short_id};

pub async fn run(store: &AppointmentStore, config: &GamedayConfig, id: &str) -> Result<()> {
    let appointments = store.list_all()?;

    let appointment = appointments
        .iter()
        .find(|a| a.id == id || short_id(&a.id) == id)
        .ok_or_else(|| anyhow::anyhow!("No appointment with id '{}'", id))?;

    print_appointment(appointment);

    if appointment.guild.id.is_empty() {
        return Ok(());
    }

    // Live presence is best-effort: the local record is already shown, a
    // widget failure only costs the member list.
    match client::fetch_guild_widget(&config.widget_api_base, &appointment.guild.id).await {
        Ok(widget) => {
            println!("  {}", format!("Players  Total {}", widget.presence_count).bold());
            for member in &widget.members {
                println!("   {}", member.render());
            }
            if appointment.guild.owner
                && let Some(invite) = &widget.instant_invite
            {
                println!();
                println!("  Invite: {}", invite.cyan());
            }
        }
        Err(_) => {
            println!(
                "{}",
                "  Could not load the server widget. Check the server settings\n  \
                 and enable \"Widget\" if it is disabled."
                    .yellow()
            );
        }
    }

    Ok(())
}

fn print_appointment(appointment: &Appointment) {
    println!();
    println!(
        "  {}",
        if appointment.guild.name.is_empty() {
            "(no server)".to_string()
        } else {
            appointment.guild.name.bold().to_string()
        }
    );
    println!("  {}", appointment.description);
    println!("  {}", appointment.date.green());
    println!();
}
