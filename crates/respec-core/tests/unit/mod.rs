mod error_coverage;
mod scenarios;
