//! UI Components
//!
//! Pages and the Leptos components they are built from.

mod todo_list;
mod todo_row;
mod new_todo_form;
mod filter_bar;
mod theme_toggle;
mod todo_page;

pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use new_todo_form::NewTodoForm;
pub use filter_bar::FilterBar;
pub use theme_toggle::ThemeToggle;
pub use todo_page::TodoPage;
