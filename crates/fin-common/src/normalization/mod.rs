//! Value normalization shared by the classifier, the statistics engine and the forecaster.

pub mod date;
pub mod numeric;
