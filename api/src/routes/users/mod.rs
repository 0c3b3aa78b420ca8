//! User route handlers
//!
//! - `POST /user` - account registration
//! - `GET /user/me` - profile of the authenticated user

pub mod me;
pub mod register;
