mod sign_request;

pub use sign_request::sign_request;
