//! Denormalized event projection for listing UIs.

use std::collections::HashMap;

use time::macros::format_description;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::event::{DisplayEvent, Event};
use crate::models::location::Location;
use crate::models::user::User;

/// Join every event with its organizer and location and format the
/// schedule for display.
///
/// Fails with `NotFound` as soon as any event references an organizer or
/// location missing from the supplied sets: no partial list is ever
/// returned. Output order follows the input event order. Lookups go through
/// id maps built once per call; when an id appears twice, the first
/// occurrence wins.
pub fn assemble(
    events: &[Event],
    organizers: &[User],
    locations: &[Location],
) -> Result<Vec<DisplayEvent>> {
    let date_format = format_description!("[day]/[month]/[year]");
    let time_format = format_description!("[hour]:[minute]");

    let mut organizers_by_id: HashMap<Uuid, &User> = HashMap::with_capacity(organizers.len());
    for organizer in organizers {
        organizers_by_id.entry(organizer.id).or_insert(organizer);
    }
    let mut locations_by_id: HashMap<Uuid, &Location> = HashMap::with_capacity(locations.len());
    for location in locations {
        locations_by_id.entry(location.id).or_insert(location);
    }

    let mut displays = Vec::with_capacity(events.len());
    for event in events {
        let organizer = organizers_by_id.get(&event.organizer_id).ok_or_else(|| {
            AppError::NotFound(format!("Organizer for event {} not found", event.id))
        })?;
        let location = locations_by_id.get(&event.location_id).ok_or_else(|| {
            AppError::NotFound(format!("Location for event {} not found", event.id))
        })?;

        displays.push(DisplayEvent {
            name: event.name.clone(),
            description: event.description.clone(),
            start_date: event
                .starts_at
                .format(&date_format)
                .map_err(anyhow::Error::from)?,
            start_time: event
                .starts_at
                .format(&time_format)
                .map_err(anyhow::Error::from)?,
            end_date: event
                .ends_at
                .format(&date_format)
                .map_err(anyhow::Error::from)?,
            end_time: event
                .ends_at
                .format(&time_format)
                .map_err(anyhow::Error::from)?,
            location: location.auditorium.clone(),
            organizer: organizer.name.clone(),
            event_id: event.id,
        });
    }

    Ok(displays)
}
