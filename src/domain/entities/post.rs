//! Post entity and its write-side companions.

/// A post row as stored in the `posts` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub contents: String,
}

impl Post {
    /// Creates a new Post instance.
    pub fn new(id: i64, title: String, contents: String) -> Self {
        Self {
            id,
            title,
            contents,
        }
    }
}

/// Column values for inserting a post. The id is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub contents: String,
}

/// Partial replacement of a post's columns.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub contents: Option<String>,
}

impl PostPatch {
    /// Returns true if the patch would not touch any column.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.contents.is_none()
    }
}
