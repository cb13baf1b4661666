pub mod grading;

pub use grading::SpellingGrader;
