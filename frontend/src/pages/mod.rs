pub mod home;
pub mod login;
pub mod signup;
pub mod storefront;

pub use home::*;
pub use login::LoginPage;
pub use signup::*;
pub use storefront::StorefrontPage;
