pub mod employees;
pub mod logs;
pub mod workplaces;
