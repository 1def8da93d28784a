mod command;
mod journal;
mod notifier;
mod value_object;

pub use command::*;
pub use journal::*;
pub use notifier::*;
pub use value_object::*;
