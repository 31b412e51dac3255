//! The `kinds` command - list the available orders.

use vistas::OrderKind;

/// Run the kinds command.
pub fn run() {
    for kind in OrderKind::ALL {
        println!("{kind}");
    }
}
