use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::{domain::Reservation, errors::Result, storage::LedgerStore};

/// Turns the ledger into a grouped plain-text trip report.
pub struct SummaryService<S: LedgerStore> {
    store: S,
}

struct DateBucket<'a> {
    date: NaiveDate,
    entries: Vec<&'a Reservation>,
}

struct CityBucket<'a> {
    city: &'a str,
    dates: Vec<DateBucket<'a>>,
}

impl<S: LedgerStore> SummaryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Renders the report. This boundary never fails: any error is folded
    /// into the returned text so the consuming channel stays plain text.
    pub fn generate(&self) -> String {
        match self.try_generate() {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!("Trip summary failed: {err}");
                format!("Error generating trip summary: {err}")
            }
        }
    }

    /// Fallible inner path, kept separate so error conditions stay testable.
    pub fn try_generate(&self) -> Result<String> {
        let records = self.store.load()?;
        Ok(render_report(&records))
    }
}

fn render_report(records: &[Reservation]) -> String {
    let mut cities: Vec<CityBucket<'_>> = Vec::new();
    let mut total_cost: u64 = 0;

    // Buckets keep first-seen order for both cities and dates; the report
    // reads in booking order, not alphabetically or chronologically.
    for reservation in records {
        total_cost += u64::from(reservation.cost());
        let city = reservation.report_city();
        let date = reservation.report_date();

        let city_idx = match cities.iter().position(|bucket| bucket.city == city) {
            Some(idx) => idx,
            None => {
                cities.push(CityBucket {
                    city,
                    dates: Vec::new(),
                });
                cities.len() - 1
            }
        };
        let dates = &mut cities[city_idx].dates;
        let date_idx = match dates.iter().position(|bucket| bucket.date == date) {
            Some(idx) => idx,
            None => {
                dates.push(DateBucket {
                    date,
                    entries: Vec::new(),
                });
                dates.len() - 1
            }
        };
        dates[date_idx].entries.push(reservation);
    }

    let mut report = String::from("Trip Summary Report:\n");
    for city_bucket in &cities {
        let _ = writeln!(report, "\nCity: {}", city_bucket.city);
        for date_bucket in &city_bucket.dates {
            let _ = writeln!(report, "  Date: {}", date_bucket.date);
            for entry in &date_bucket.entries {
                report.push_str("    - ");
                report.push_str(&describe(entry));
                report.push('\n');
            }
        }
    }
    let _ = writeln!(report, "\nTotal Trip Cost: {} Bs.", total_cost);
    report
}

fn describe(reservation: &Reservation) -> String {
    match reservation {
        Reservation::Trip(trip) => format!(
            "{}: from {} to {}, Cost: {} Bs.",
            trip.mode.label(),
            trip.departure,
            trip.destination,
            trip.cost
        ),
        Reservation::Hotel(stay) => format!(
            "Hotel: {}, Check-in: {}, Check-out: {}, Cost: {} Bs.",
            stay.hotel_name, stay.checkin_date, stay.checkout_date, stay.cost
        ),
        Reservation::Restaurant(booking) => format!(
            "Restaurant: {}, Reservation Time: {}, Dish: {}, Cost: {} Bs.",
            booking.restaurant,
            booking.reservation_time.format("%Y-%m-%d %H:%M"),
            booking.dish,
            booking.cost
        ),
    }
}
