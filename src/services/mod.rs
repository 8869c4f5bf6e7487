pub mod reservation_service;
pub mod summary_service;

pub use reservation_service::ReservationService;
pub use summary_service::SummaryService;
