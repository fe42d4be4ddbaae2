//! Verifies the generated icon unicode map against the icon font manifest.
//!
//! Failed assertions are reported but do not change the exit status.

use iconmap::ctx::Context;
use iconmap::harness;
use std::process;

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();

    let ctx = Context::default();

    match harness::run(&ctx) {
        Ok(report) => {
            print!("{}", report);

            let failures = report.failure_count();
            if failures > 0 {
                log::warn!("{} assertions failed", failures);
            }
        }
        Err(e) => {
            log::error!("{}", e);
            if let Some(source) = std::error::Error::source(&e) {
                log::error!("caused by: {}", source);
            }
            process::exit(1);
        }
    }
}
