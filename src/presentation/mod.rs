//! Presentation Layer
//!
//! Wires configuration into concrete use cases for the binary.
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use cardsmith::presentation::factory;
//!
//! let use_case = factory::create_generate_use_case(&config)?;
//! let result = use_case.execute(&options)?;
//! ```

pub mod factory;

pub use factory::create_generate_use_case;
