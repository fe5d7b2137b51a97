mod app;
pub mod backend;

pub use app::{
    ConversionRequest, ConversionWorker, ConverterApp, ConverterState, SharedBackend,
    GUIDANCE_MESSAGE,
};
