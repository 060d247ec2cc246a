use env_logger::{Builder, Env};
use std::io::Write;

pub fn init() {
    // `RUST_LOG` overrides the default of showing progress and skipped blocks.
    let env = Env::default().filter_or("RUST_LOG", "info");

    Builder::from_env(env)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .target(env_logger::Target::Stderr)
        .init();
}
