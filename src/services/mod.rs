pub mod auth_service;
pub mod composer_service;
pub mod menu_service;
pub mod payment_service;

pub use auth_service::*;
pub use composer_service::*;
pub use menu_service::*;
pub use payment_service::*;
