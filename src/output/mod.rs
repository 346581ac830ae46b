mod format;
mod json;
mod table;

pub(crate) use json::{data_url_json, infer_json, navigation_json, resolution_json};
pub(crate) use table::{print_infer_table, print_resolution_table};
