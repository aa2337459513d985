pub mod add_form;
pub mod gallery;
pub mod header;
