pub mod dto;
pub mod server;
pub mod view;
