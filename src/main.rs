//! giftlog main entrypoint.

use giftlog::run;
use giftlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
