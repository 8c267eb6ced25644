// Domain layer - Launch data, control selection and chart models
pub mod chart;
pub mod launch;
pub mod layout;
pub mod selection;
