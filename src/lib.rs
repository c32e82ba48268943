//! Captime: Caption Timing Conversion Library
//!
//! Converts caption timing CSV exports (`hours;minutes;seconds;fraction`
//! timecodes) into JSON arrays of elapsed-seconds records.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
