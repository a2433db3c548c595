pub mod seat;
pub mod grid;
pub mod view;

pub use seat::{Seat, SeatId, SeatStatus};
pub use grid::SeatGrid;
pub use view::{SeatMapView, SeatView};
