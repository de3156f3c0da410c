pub mod use_cases;

pub use use_cases::{
    forgot_password::ForgotPasswordUseCase, update_password::UpdatePasswordUseCase,
};
