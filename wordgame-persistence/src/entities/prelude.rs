pub use super::scores::Entity as Scores;
pub use super::words::Entity as Words;
