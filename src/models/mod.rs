pub mod chart;
pub mod entries;

pub use self::chart::*;
pub use self::entries::*;
