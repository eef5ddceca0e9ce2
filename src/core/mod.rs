pub mod detect;
pub mod report;
pub mod validator;
pub mod window;
