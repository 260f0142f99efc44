pub mod alphabet;
pub mod detect;
pub mod localize;
pub mod normalize;
pub mod script;
pub mod translit;

pub use detect::detect_script;
pub use localize::{Localizer, t};
pub use normalize::normalize;
pub use script::{Direction, Script, ScriptError};
pub use translit::transliterate;
