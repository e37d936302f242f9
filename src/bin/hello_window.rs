//! Lesson 1.1.1: open a window and clear it every frame.

use glbook::{App, Error, WindowConfig};

fn main() {
    glbook::logging::init();

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let mut app = App::build(&WindowConfig::titled("LearnOpenGL - 1.1.1 - Hello Window"))?;

    // Nothing to draw yet; the scaffold clears and swaps on its own.
    app.run(|_| {});

    Ok(())
}
