//! # Cyrillic Caesar
//!
//! Caesar cipher over the 33-letter Cyrillic alphabet, plus the letter
//! frequency analysis that breaks it.
//!
//! ## Usage
//!
//! ```rust
//! use cyrillic_caesar::{transform_str, FrequencyComparison, FrequencyTable, Mode, ShiftKey};
//!
//! let key = ShiftKey::new(3)?;
//! let encoded = transform_str("Привет, мир!", key, Mode::Encode);
//! assert_eq!(encoded.text, "Тулезх, плу!");
//!
//! let decoded = transform_str(&encoded.text, key, Mode::Decode);
//! assert_eq!(decoded.text, "Привет, мир!");
//!
//! let comparison = FrequencyComparison::new(
//!     FrequencyTable::from_text(&encoded.text),
//!     FrequencyTable::from_text("Привет, мир!"),
//! );
//! assert_eq!(comparison.rows().count(), 33);
//! # Ok::<(), cyrillic_caesar::CaesarError>(())
//! ```

pub mod alphabet;
pub mod cipher;
pub mod error;
pub mod files;
pub mod frequency;
pub mod key;
pub mod report;

pub use cipher::{transform, transform_str, CharWarning, Mode, Transformed};
pub use error::{CaesarError, Result};
pub use files::{analyze_files, cipher_file, CipherOutcome};
pub use frequency::{analyze, FrequencyComparison, FrequencyRow, FrequencyTable};
pub use key::ShiftKey;
