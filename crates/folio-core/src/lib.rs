pub mod certification;
pub mod config;
pub mod contact;
pub mod dates;
pub mod education;
pub mod error;
pub mod experience;
pub mod grouping;
pub mod io;
pub mod ordering;
pub mod paths;
pub mod profile;
pub mod project;
pub mod publication;
pub mod selection;
pub mod skill;
pub mod social_link;
pub mod store;
pub mod types;
pub mod upload;
pub mod view;

pub use error::{FolioError, Result};
