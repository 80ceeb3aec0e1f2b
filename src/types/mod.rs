mod rating;
mod team;

pub use rating::Rating;
pub use team::Team;
