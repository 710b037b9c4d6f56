//! Page components
//!
//! Leaves (`BentoTilt`, `BentoCard`, `ImageClipBox`, `AnimatedTitle`,
//! `Button`) carry the pointer effects; sections (`Features`, `Contact`)
//! compose them with the loaded site content.

mod animated_title;
mod bento;
mod button;
mod contact;
mod features;

pub use animated_title::AnimatedTitle;
pub use bento::{BentoCard, BentoTilt};
pub use button::Button;
pub use contact::{Contact, ImageClipBox};
pub use features::Features;
