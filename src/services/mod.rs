// Backend API services
pub mod notes;
