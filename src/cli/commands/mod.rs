pub mod dropdown;
pub mod option;
pub mod settings;
