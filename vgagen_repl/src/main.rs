mod repl;
pub use log::{trace,debug,info,warn,error};

use vgagen::Generator;

/// Warnings and above unless `RUST_LOG` says otherwise.
pub fn logger() -> env_logger::Builder {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
}

fn main() -> anyhow::Result<()> {
  logger().init();
  info!("vgagen v{}.{}.{}",
    env!("CARGO_PKG_VERSION_MAJOR"),
    env!("CARGO_PKG_VERSION_MINOR"),
    env!("CARGO_PKG_VERSION_PATCH"));
  let generator = Generator::default();
  let stdin = std::io::stdin();
  let stdout = std::io::stdout();
  let stderr = std::io::stderr();
  let blocks = repl::run(&generator, stdin.lock(), stdout.lock(), stderr.lock())?;
  debug!("input closed after {} blocks", blocks);
  Ok(())
}
