use rand::Rng;

use crate::{
    domain::{
        HotelReservation, Reservation, RestaurantReservation, TripMode, TripReservation,
        DEFAULT_DISH,
    },
    errors::Result,
    parse,
    storage::LedgerStore,
};

/// Books reservations: validates temporal fields, draws the cost, and
/// commits the record to the ledger. Exactly one append per successful call;
/// a parse failure aborts before anything is written.
pub struct ReservationService<S: LedgerStore> {
    store: S,
}

impl<S: LedgerStore> ReservationService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn reserve_flight(
        &self,
        date_text: &str,
        departure: &str,
        destination: &str,
    ) -> Result<Reservation> {
        self.reserve_trip(TripMode::Flight, date_text, departure, destination)
    }

    pub fn reserve_bus(
        &self,
        date_text: &str,
        departure: &str,
        destination: &str,
    ) -> Result<Reservation> {
        self.reserve_trip(TripMode::Bus, date_text, departure, destination)
    }

    fn reserve_trip(
        &self,
        mode: TripMode,
        date_text: &str,
        departure: &str,
        destination: &str,
    ) -> Result<Reservation> {
        let date = parse::parse_date(date_text)?;
        let cost = rand::thread_rng().gen_range(mode.cost_range());
        tracing::info!(
            "Booking {} from {} to {} on {}",
            mode.label(),
            departure,
            destination,
            date
        );
        let reservation = Reservation::Trip(TripReservation {
            mode,
            departure: departure.into(),
            destination: destination.into(),
            date,
            cost,
        });
        self.store.append(&reservation)?;
        Ok(reservation)
    }

    pub fn reserve_hotel(
        &self,
        checkin_text: &str,
        checkout_text: &str,
        hotel_name: &str,
        city: &str,
    ) -> Result<Reservation> {
        let checkin_date = parse::parse_date(checkin_text)?;
        let checkout_date = parse::parse_date(checkout_text)?;
        let cost = rand::thread_rng().gen_range(HotelReservation::cost_range());
        tracing::info!(
            "Booking hotel {} in {} from {} to {}",
            hotel_name,
            city,
            checkin_date,
            checkout_date
        );
        let reservation = Reservation::Hotel(HotelReservation {
            hotel_name: hotel_name.into(),
            city: city.into(),
            checkin_date,
            checkout_date,
            cost,
        });
        self.store.append(&reservation)?;
        Ok(reservation)
    }

    /// Books a restaurant table. A missing `dish` is recorded as
    /// "not specified".
    pub fn reserve_restaurant(
        &self,
        time_text: &str,
        restaurant: &str,
        city: &str,
        dish: Option<&str>,
    ) -> Result<Reservation> {
        let reservation_time = parse::parse_datetime(time_text)?;
        let cost = rand::thread_rng().gen_range(RestaurantReservation::cost_range());
        tracing::info!(
            "Booking restaurant {} in {} at {}",
            restaurant,
            city,
            reservation_time
        );
        let reservation = Reservation::Restaurant(RestaurantReservation {
            restaurant: restaurant.into(),
            city: city.into(),
            reservation_time,
            dish: dish.unwrap_or(DEFAULT_DISH).into(),
            cost,
        });
        self.store.append(&reservation)?;
        Ok(reservation)
    }
}
