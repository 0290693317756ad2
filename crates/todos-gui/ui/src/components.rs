mod error_notification;
mod filter_link;
mod todo_footer;
mod todo_header;
mod todo_item;
mod todo_list;
mod user_warning;

pub use error_notification::ErrorNotification;
pub use filter_link::FilterLink;
pub use todo_footer::TodoFooter;
pub use todo_header::TodoHeader;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use user_warning::UserWarning;
