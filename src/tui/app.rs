mod state;

pub use state::{ChartView, InputAction};
