//! Audits the fill/line pairing of the generated icon names and writes the markdown report.

use iconmap::audit;
use iconmap::ctx::Context;
use iconmap::Error;
use std::process;

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();

    let ctx = Context::default();

    match audit::run(&ctx) {
        Ok(report) => {
            print!("{}", report.console());
            println!();
            println!("Report written to {}", ctx.report_path.display());
        }
        Err(e) => {
            log::error!("{}", e);
            if let Error::MissingInput { .. } = e {
                log::error!("run `generate_icon_config` first");
            } else if let Some(source) = std::error::Error::source(&e) {
                log::error!("caused by: {}", source);
            }
            process::exit(1);
        }
    }
}
