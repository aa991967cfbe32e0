pub mod constants;
pub mod field;
pub mod gears;
pub mod mascot;
pub mod rain;
pub mod state;

pub use field::*;
pub use gears::*;
pub use mascot::*;
pub use rain::*;
pub use state::*;
