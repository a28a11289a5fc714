//! rbudget main entrypoint.

use rbudget::run;
use rbudget::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
