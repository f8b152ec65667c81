//! Data models for PromptHub

mod photo;
mod prompt;

pub use photo::{
    Attribution, FetchOutcome, Photo, PhotoError, PhotoLinks, PhotoUrls, PhotoUser, PhotoUserLinks,
};
pub use prompt::Prompt;
