mod copy_button;
mod footer;
mod navbar;
mod typewriter;

pub use copy_button::CopyButton;
pub use footer::Footer;
pub use navbar::Navbar;
pub use typewriter::Typewriter;
