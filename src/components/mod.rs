//! UI Components
//!
//! Leptos components for the OrderUp pages and the cart sidebar.

mod cart_row;
mod cart_sidebar;
mod home;
mod menu_add_page;
mod menu_page;
mod nav;
mod orders_page;
mod place_order_button;
mod upload_page;

pub use cart_row::CartRow;
pub use cart_sidebar::CartSidebar;
pub use home::HomePage;
pub use menu_add_page::MenuAddPage;
pub use menu_page::MenuPage;
pub use nav::Nav;
pub use orders_page::OrdersPage;
pub use place_order_button::PlaceOrderButton;
pub use upload_page::UploadPage;
