pub mod etl;
pub mod grouper;
pub mod render;
pub mod source;

pub use crate::domain::model::{CourseName, ItemRecord, MenuGroups, WritePayload};
pub use crate::domain::ports::{MenuWriter, Pipeline, Storage};
pub use crate::utils::error::Result;
