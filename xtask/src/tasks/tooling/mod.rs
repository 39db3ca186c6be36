pub mod doctor;
pub mod flags;
pub mod sdk;
pub mod setup;
