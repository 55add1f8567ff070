//! BEM (Block Element Modifier) class name composer.
//!
//! ```
//! use bemkit::{bem, Extra, Modifiers};
//!
//! assert_eq!(bem("card", None, None, None), "card");
//!
//! let modifiers = Modifiers::from(["fancy"]);
//! let extra = Extra::from("inside-card");
//! assert_eq!(
//!     bem("card", Some("title"), Some(&modifiers), Some(&extra)),
//!     "card__title card__title--fancy inside-card"
//! );
//! ```

pub mod block;
pub mod composer;
pub mod error;
pub mod extra;
pub mod modifiers;
pub mod request;

pub use block::{Block, BlockRef};
pub use composer::{bem, Composer, Separators};
pub use error::{BemError, BemResult};
pub use extra::Extra;
pub use modifiers::{FlagValue, Modifiers};
pub use request::ClassRequest;
