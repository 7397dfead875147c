pub mod configure;
pub mod dns;
pub mod enumerate;
pub mod info;
pub mod refresh;
