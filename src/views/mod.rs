//! Text renderers for the console page

pub mod customer_list;
pub mod format;
pub mod movie_list;
pub mod page;
pub mod rental_list;

pub use customer_list::{CustomerAction, render_customers};
pub use movie_list::{MovieAction, render_movies};
pub use page::Page;
pub use rental_list::{NameIndex, RentalAction, render_rentals};
