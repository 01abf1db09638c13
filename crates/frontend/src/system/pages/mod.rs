pub mod client_login;
pub mod landing;
