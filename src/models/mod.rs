pub use author::*;
pub use blog::*;
pub use contact::*;
pub use content::*;
pub use tags::*;
pub use video::*;
pub use video_source::*;

mod author;
mod blog;
mod contact;
mod content;
mod tags;
mod video;
mod video_source;
