pub mod card;
pub mod host;
pub mod output;
