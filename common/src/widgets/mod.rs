//! Rendering widgets for the watch face.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` so the same
//! code drives the simulator display and a hardware panel.

pub mod dial;
pub mod hands;
pub mod modules;

pub use dial::{draw_battery_scale, draw_center_plate, draw_face_background, draw_tick_ring};
pub use hands::{HandGeometry, draw_hand, draw_hand_with_shadow, radial_point};
pub use modules::{draw_date_module, draw_heartrate_module, draw_moon_module, draw_steps_module};
