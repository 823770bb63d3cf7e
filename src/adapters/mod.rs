// Adapters layer: concrete implementations for external systems.

pub mod resend;

pub use resend::ResendMailer;
