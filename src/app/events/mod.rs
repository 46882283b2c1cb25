//! AppIntent- und AppCommand-Enums fuer den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
