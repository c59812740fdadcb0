pub mod request;

pub use request::GenerateContentRequest;
