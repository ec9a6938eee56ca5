pub mod server;

pub use crate::domain::model::{NewUser, User, UserType};
pub use crate::domain::ports::{ConfigProvider, UserStore};
pub use crate::utils::error::Result;
