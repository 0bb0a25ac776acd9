mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod feed;
pub use feed::Feed;
