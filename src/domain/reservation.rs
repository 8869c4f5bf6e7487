use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Dish recorded when a restaurant booking does not name one.
pub const DEFAULT_DISH: &str = "not specified";

/// Transport mode of a trip reservation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TripMode {
    Flight,
    Bus,
}

impl TripMode {
    /// Uniform cost range drawn from at booking time, in whole currency units.
    pub fn cost_range(self) -> RangeInclusive<u32> {
        match self {
            TripMode::Flight => 200..=700,
            TripMode::Bus => 50..=300,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TripMode::Flight => "Flight",
            TripMode::Bus => "Bus",
        }
    }
}

/// A flight or bus leg between two places on a given date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripReservation {
    pub mode: TripMode,
    pub departure: String,
    pub destination: String,
    pub date: NaiveDate,
    pub cost: u32,
}

/// A hotel stay. Check-in/check-out ordering is not validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotelReservation {
    pub hotel_name: String,
    pub city: String,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    pub cost: u32,
}

impl HotelReservation {
    pub fn cost_range() -> RangeInclusive<u32> {
        300..=1500
    }
}

/// A restaurant table at a specific date and time, with an optional dish.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RestaurantReservation {
    pub restaurant: String,
    pub city: String,
    pub reservation_time: NaiveDateTime,
    pub dish: String,
    pub cost: u32,
}

impl RestaurantReservation {
    pub fn cost_range() -> RangeInclusive<u32> {
        20..=200
    }
}

/// One committed booking. Serialized as a flat object tagged by `kind`
/// (`trip`, `hotel`, or `restaurant`); immutable once written to the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Reservation {
    Trip(TripReservation),
    Hotel(HotelReservation),
    Restaurant(RestaurantReservation),
}

impl Reservation {
    pub fn cost(&self) -> u32 {
        match self {
            Reservation::Trip(trip) => trip.cost,
            Reservation::Hotel(stay) => stay.cost,
            Reservation::Restaurant(booking) => booking.cost,
        }
    }

    /// City the booking contributes to when grouping a report: the
    /// destination for trips, the explicit city otherwise.
    pub fn report_city(&self) -> &str {
        match self {
            Reservation::Trip(trip) => &trip.destination,
            Reservation::Hotel(stay) => &stay.city,
            Reservation::Restaurant(booking) => &booking.city,
        }
    }

    /// Calendar date the booking is grouped under: travel date, check-in
    /// date, or the date component of the reservation time.
    pub fn report_date(&self) -> NaiveDate {
        match self {
            Reservation::Trip(trip) => trip.date,
            Reservation::Hotel(stay) => stay.checkin_date,
            Reservation::Restaurant(booking) => booking.reservation_time.date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trip() -> Reservation {
        Reservation::Trip(TripReservation {
            mode: TripMode::Flight,
            departure: "La Paz".into(),
            destination: "Santa Cruz".into(),
            date: NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
            cost: 450,
        })
    }

    #[test]
    fn reservations_serialize_with_a_normalized_kind_tag() {
        let json = serde_json::to_value(sample_trip()).expect("serialize trip");
        assert_eq!(json["kind"], "trip");
        assert_eq!(json["mode"], "flight");
        assert_eq!(json["destination"], "Santa Cruz");
        assert_eq!(json["cost"], 450);
    }

    #[test]
    fn trip_roundtrips_through_json() {
        let trip = sample_trip();
        let json = serde_json::to_string(&trip).expect("serialize");
        let back: Reservation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, trip);
    }

    #[test]
    fn report_city_prefers_destination_for_trips() {
        let trip = sample_trip();
        assert_eq!(trip.report_city(), "Santa Cruz");

        let stay = Reservation::Hotel(HotelReservation {
            hotel_name: "Hotel Europa".into(),
            city: "Sucre".into(),
            checkin_date: NaiveDate::from_ymd_opt(2025, 7, 16).unwrap(),
            checkout_date: NaiveDate::from_ymd_opt(2025, 7, 18).unwrap(),
            cost: 800,
        });
        assert_eq!(stay.report_city(), "Sucre");
    }

    #[test]
    fn report_date_truncates_reservation_time() {
        let booking = Reservation::Restaurant(RestaurantReservation {
            restaurant: "Gustu".into(),
            city: "La Paz".into(),
            reservation_time: NaiveDate::from_ymd_opt(2025, 7, 20)
                .unwrap()
                .and_hms_opt(20, 30, 0)
                .unwrap(),
            dish: DEFAULT_DISH.into(),
            cost: 120,
        });
        assert_eq!(
            booking.report_date(),
            NaiveDate::from_ymd_opt(2025, 7, 20).unwrap()
        );
    }
}
