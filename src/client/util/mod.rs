pub mod download;
pub mod load;

pub use download::save_file;
pub use load::{load_into, use_authorized_api, use_view_resource};
