mod config;
mod harness;
mod report;

pub use config::EvalConfig;
pub use harness::{GoodnessOfFit, Verdict};
pub use report::{write_report, Sig6};
