pub mod columns;
pub mod controller;
pub mod query;
pub mod refetch;
pub mod source;
pub mod view;

pub use columns::{yes_no, Cell, Column};
pub use controller::{FetchTicket, Resolution, TableController, TableSnapshot, ViewState};
pub use query::{PageResult, QueryState, SortDirection};
pub use refetch::RefetchTrigger;
pub use source::{list_params, ListSource};
pub use view::TableView;
