pub mod granularity;
pub mod layout;
pub mod mapper;
pub mod types;
pub mod unit;
pub mod window;

pub use granularity::select_units;
pub use layout::AxisLayout;
pub use mapper::AxisMapper;
pub use types::{Rect, Viewport};
pub use unit::TimeUnit;
pub use window::TimeWindow;
