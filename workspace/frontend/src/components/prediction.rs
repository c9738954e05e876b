pub mod banner;
pub mod cards;
pub mod chart;
pub mod form;
pub mod view;

pub use view::PredictionView;
