//! Collision-resistant UUIDs from hashed per-thread counters
//!
//! ```rust
//! use hashuuid::{generate, Uuid};
//!
//! let uuid = generate();
//! println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte array
//!
//! let parsed: Uuid = uuid.to_string().parse()?;
//! assert_eq!(parsed, uuid);
//! # Ok::<(), hashuuid::ParseError>(())
//! ```
//!
//! # Generation scheme
//!
//! Each generator owns a 128-bit counter, seeded once with 16 bytes from the operating system's
//! random device. Every UUID consumes one counter value: the value is hashed with SHA-256, the
//! first 16 bytes of the digest are kept, and the version and variant fields are overwritten so
//! the result looks like a version-4 UUID:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         SHA-256[0..4]                         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |         SHA-256[4..6]         |  ver  |    SHA-256[6..8]      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                     SHA-256[8..12]                        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                        SHA-256[12..16]                        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where the 4-bit `ver` field is set at `0100` and the 2-bit `var` field is set at `10`.
//!
//! Only one entropy read happens per generator, so generation costs a hash and no system call.
//! Within a generator the counter never repeats (before 2^128 values), and the hash hides both
//! the counter and the generation order. Two generators collide only if their seeds coincide or
//! SHA-256 does.
//!
//! The [`generate`] function keeps one generator per thread. [`Generator`] can be owned
//! directly where an explicit context object is preferable.
//!
//! # Sentinels
//!
//! [`Uuid::default()`] is [`Uuid::UNSET`], a reserved pattern distinct from [`Uuid::NIL`], so
//! identifiers that were never assigned can be caught with [`Uuid::is_unset`].
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` enables the thread-local [`generate`] function, seeding from the operating system
//!   through `rand`, and `tracing` events.
//!
//! Optional features:
//!
//! - `serde` enables serialization and deserialization of [`Uuid`] objects.
//! - `uuid` enables conversion from/to [`uuid::Uuid`] objects.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod codec;

mod error;
pub use error::{EntropyError, ParseError};

mod id;
pub use id::{Uuid, Variant};

pub mod generator;
pub use generator::{EntropySource, Generator};

mod entry;
#[cfg(feature = "std")]
pub use entry::generate;
