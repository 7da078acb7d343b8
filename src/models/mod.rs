pub mod payload;

pub use payload::{AuthRequest, AuthSuccessResponse, MSG_AUTH_SUCCESS};
