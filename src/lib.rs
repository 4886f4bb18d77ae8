pub mod cli;
pub mod compose;
pub mod config;
pub mod dataset;
pub mod export;
pub mod normal;
pub mod pipeline;
pub mod report;
pub mod table;
pub mod util;
