// Models module
// Data types shared by the services and the UI

pub mod event;
pub mod settings;
