pub mod assignment;
pub mod facility;
pub mod observation;
pub mod sequencer;
pub mod strategy;
