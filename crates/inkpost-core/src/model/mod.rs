pub mod comment;
pub mod post;

pub use comment::{Comment, CommentDraft};
pub use post::{Post, PostDetail, PostDraft, PostId};
