use colored::*;
use std::process::ExitCode;
use suite_metrics::cli;
use suite_metrics::core::PipelineError;
use suite_metrics::infra::logging::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    // Process the command
    match cli::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(pipeline) = e.downcast_ref::<PipelineError>() {
                if !pipeline.is_fatal() {
                    return ExitCode::SUCCESS;
                }
            }
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
