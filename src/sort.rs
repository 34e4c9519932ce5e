use crate::error::Result;
use crate::normalize::parse_clock;
use crate::types::PlayerRow;
use chrono::{NaiveTime, Timelike};

/// `(hour, minute)` of a tee time; `None` for rows without a time.
type TimeOfDay = Option<(u32, u32)>;

fn time_of_day(time: &str) -> Result<TimeOfDay> {
    if time.is_empty() {
        return Ok(None);
    }
    let clock: NaiveTime = parse_clock(time)?;
    Ok(Some((clock.hour(), clock.minute())))
}

/// Order rows by group, then tee time, then last name.
///
/// The sort is stable. Keys are computed up front, so an unparseable time
/// returns an error and leaves `rows` in its original order.
pub fn sort_rows(rows: &mut Vec<PlayerRow>) -> Result<()> {
    let mut keyed = Vec::with_capacity(rows.len());
    for row in rows.iter() {
        keyed.push(time_of_day(&row.time)?);
    }

    let mut indexed: Vec<(TimeOfDay, PlayerRow)> = keyed.into_iter().zip(rows.drain(..)).collect();
    indexed.sort_by(|(a_time, a), (b_time, b)| {
        a.group
            .cmp(&b.group)
            .then_with(|| a_time.cmp(b_time))
            .then_with(|| a.last_name.cmp(&b.last_name))
    });
    rows.extend(indexed.into_iter().map(|(_, row)| row));
    Ok(())
}
