//! Terminal frontend for the pizza order form
//!
//! Runs a read-dispatch-render loop: each line of input becomes a command,
//! form events go through the controller (which revalidates on every
//! change), and the form is redrawn afterwards.

use std::io::{self, BufRead, Write};

use pizza_form::app::controller::FormController;
use pizza_form::input::commands::{self, Command};
use pizza_form::ui::FormScreen;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn render(controller: &FormController) -> String {
    FormScreen::from_state(controller.state(), controller.config(), controller.can_submit())
        .render()
}

fn main() -> io::Result<()> {
    init_tracing();

    let mut controller = FormController::standard();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", render(&controller))?;
    writeln!(out)?;
    writeln!(out, "{}", commands::usage())?;

    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF ends the session like 'quit'
            writeln!(out)?;
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match commands::parse(&line) {
            Ok(Command::Form(event)) => {
                controller.apply(event);
                writeln!(out, "\n{}", render(&controller))?;
            }
            Ok(Command::Show) => writeln!(out, "\n{}", render(&controller))?,
            Ok(Command::Help) => writeln!(out, "{}", commands::usage())?,
            Ok(Command::Quit) => break,
            Err(error) => writeln!(out, "{error}")?,
        }
    }

    tracing::debug!("session ended");
    Ok(())
}
