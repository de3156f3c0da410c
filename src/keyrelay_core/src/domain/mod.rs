pub mod backend_user;
pub mod connection;
pub mod email;
pub mod identity_account;
pub mod identity_key;
pub mod input_error;
pub mod operation_result;
pub mod password;
pub mod session;
