mod choice;
mod question;

pub use choice::Choice;
pub use question::Question;
