pub mod reservation;

pub use reservation::{
    HotelReservation, Reservation, RestaurantReservation, TripMode, TripReservation,
    DEFAULT_DISH,
};
