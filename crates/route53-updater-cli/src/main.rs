//! route53-updater - register this instance in Route 53.

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match route53_updater_cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
                clap_err.exit();
            }
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
