mod add_task;
mod footer;
mod header;
mod task;
mod task_list;

pub use add_task::AddTask;
pub use footer::Footer;
pub use header::Header;
pub use task::TaskRow;
pub use task_list::TaskList;
