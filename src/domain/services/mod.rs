//! Domain Services
//!
//! Stateless text processing shared by the use cases:
//! - `fence` - strip markdown code fences from model output
//! - `extractor` - find the exported component of a card module
//! - `templates` - build the prompts sent to the model

pub mod extractor;
pub mod fence;
pub mod templates;

pub use extractor::{extract_component_name, find_exports, Export, CARD_BASES};
pub use fence::{strip_code_fence, FENCE_LANGUAGES};
