pub mod http;
pub mod signup;
