//! Shell completion generation for apifix

use clap::Command;
use clap_complete::{Generator, generate};
use std::io::Write;

/// Write shell completions for `app` to `out`
pub fn write_completions<G: Generator, W: Write>(generator: G, app: &mut Command, out: &mut W) {
    let name = app.get_name().to_string();
    generate(generator, app, name, out);
}

/// Print shell completions to stdout
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    write_completions(generator, app, &mut std::io::stdout());
}
