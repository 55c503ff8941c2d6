pub mod trainer;
pub mod train_config;
pub mod train_report;

pub use trainer::train_neuron;
pub use train_config::TrainConfig;
pub use train_report::TrainReport;
