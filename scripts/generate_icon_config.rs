//! Generates the icon unicode map and its structured document from the icon font manifest.

use iconmap::ctx::Context;
use iconmap::emit::{self, Provenance};
use std::process;

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();

    let ctx = Context::default();

    match emit::generate(&ctx, &Provenance::now()) {
        Ok(generated) => {
            println!("Generated {}", ctx.artifact_path.display());
            println!("Generated {}", ctx.document_path.display());
            println!();
            print!("{}", generated.statistics());
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
