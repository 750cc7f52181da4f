pub mod build_chart;

pub use self::build_chart::*;
