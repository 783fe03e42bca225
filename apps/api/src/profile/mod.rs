// Profile storage: a single JSON document per deployment, read and replaced
// wholesale by the editor.

pub mod handlers;
pub mod store;
