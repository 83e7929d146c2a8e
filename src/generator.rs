//! Hashed-counter UUID generator and related types.

use core::fmt;

use sha2::{Digest, Sha256};

use crate::{EntropyError, Uuid};

#[cfg(feature = "std")]
pub mod with_rand08;

/// A trait that defines the minimum entropy source interface for [`Generator`].
///
/// The source is consulted once per generator, to seed its counter.
pub trait EntropySource {
    /// Fills `dest` entirely with cryptographically secure random bytes, or fails.
    ///
    /// Implementations must report a partial fill as an error rather than leave part of `dest`
    /// predictable.
    fn try_fill_seed(&mut self, dest: &mut [u8; 16]) -> Result<(), EntropyError>;
}

/// Represents a generator context that owns a 128-bit counter and turns it into UUIDs.
///
/// The counter is seeded from the entropy source on first use and then incremented once per
/// UUID, so no further entropy is needed. Each counter value is hashed with SHA-256 and the
/// first 16 bytes of the digest, with the version and variant bits of a version-4 UUID set,
/// become the UUID. Neither the counter value nor the generation order can be read back from
/// the output.
///
/// A generator is a plain value with no interior locking. Give each thread (or task) its own,
/// or use [`generate`](crate::generate), which keeps one per thread. Cloning yields a fresh,
/// unseeded context rather than a copy of the counter, and the [`Debug`](fmt::Debug) output
/// never shows the counter.
///
/// # Examples
///
/// ```rust
/// use hashuuid::Generator;
///
/// let mut g = Generator::with_os_rng();
/// let x = g.generate();
/// let y = g.generate();
/// assert_ne!(x, y);
/// assert_eq!(x.version(), Some(4));
/// ```
#[derive(Default)]
pub struct Generator<E> {
    counter: Counter,

    /// The entropy source used to seed the counter.
    entropy: E,
}

/// Lifecycle of the counter of a [`Generator`].
#[derive(Default)]
enum Counter {
    #[default]
    Unseeded,
    Seeded([u8; 16]),
    /// Seeding failed; the failure is final.
    Failed(EntropyError),
}

impl<E: EntropySource> Generator<E> {
    /// Creates a generator that seeds itself from `entropy` on first use.
    pub const fn new(entropy: E) -> Self {
        Self {
            counter: Counter::Unseeded,
            entropy,
        }
    }

    /// Creates a generator whose counter starts at `counter`, bypassing the entropy source.
    ///
    /// Two generators built from the same `counter` produce the same sequence, which is only
    /// useful for replay and tests.
    pub const fn with_counter(entropy: E, counter: [u8; 16]) -> Self {
        Self {
            counter: Counter::Seeded(counter),
            entropy,
        }
    }

    /// Returns `true` once the counter has been seeded.
    pub const fn is_seeded(&self) -> bool {
        matches!(self.counter, Counter::Seeded(_))
    }

    /// Generates a new UUID.
    ///
    /// # Panics
    ///
    /// Panics if the entropy source fails while seeding the counter. A generator that cannot
    /// seed itself never retries and never falls back to weaker randomness; every later call
    /// panics again without touching the entropy source.
    pub fn generate(&mut self) -> Uuid {
        match self.try_generate() {
            Ok(uuid) => uuid,
            Err(err) => {
                #[cfg(feature = "std")]
                tracing::error!(error = %err, "could not seed UUID generator");
                panic!("hashuuid: could not seed generator: {}", err);
            }
        }
    }

    /// Generates a new UUID, or returns the error from the entropy source if the counter cannot
    /// be seeded.
    ///
    /// The error is latched: the entropy source is read at most once per generator, and every
    /// later call returns the same error.
    pub fn try_generate(&mut self) -> Result<Uuid, EntropyError> {
        let candidate = match self.counter {
            Counter::Seeded(counter) => counter,
            Counter::Failed(err) => return Err(err),
            Counter::Unseeded => {
                let mut seed = [0u8; 16];
                if let Err(err) = self.entropy.try_fill_seed(&mut seed) {
                    self.counter = Counter::Failed(err);
                    return Err(err);
                }
                #[cfg(feature = "std")]
                tracing::debug!("seeded UUID generator counter");
                seed
            }
        };

        // 128-bit big-endian increment; wraps after 2^128 values
        let next = u128::from_be_bytes(candidate).wrapping_add(1);
        self.counter = Counter::Seeded(next.to_be_bytes());
        Ok(hash_counter(&candidate))
    }
}

impl<E: Clone> Clone for Generator<E> {
    /// Returns an unseeded generator sharing the entropy source configuration, so the clone
    /// draws its own seed instead of repeating this generator's sequence. A failed generator
    /// stays failed.
    fn clone(&self) -> Self {
        Self {
            counter: match self.counter {
                Counter::Failed(err) => Counter::Failed(err),
                _ => Counter::Unseeded,
            },
            entropy: self.entropy.clone(),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Generator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.counter {
            Counter::Unseeded => "unseeded",
            Counter::Seeded(_) => "seeded",
            Counter::Failed(_) => "failed",
        };
        f.debug_struct("Generator")
            .field("counter", &format_args!("<{}>", state))
            .field("entropy", &self.entropy)
            .finish()
    }
}

/// Hashes a counter value and shapes the first 16 bytes of the digest into a version-4 UUID.
fn hash_counter(counter: &[u8; 16]) -> Uuid {
    let digest = Sha256::digest(counter);
    debug_assert!(digest.len() >= 16);

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    bytes[6] = 0x40 | (bytes[6] & 0x0f);
    bytes[8] = 0x80 | (bytes[8] & 0x3f);
    Uuid::from(bytes)
}

/// Supports operations as an infinite iterator that produces a new UUID for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use hashuuid::Generator;
///
/// Generator::with_os_rng()
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<E: EntropySource> Iterator for Generator<E> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<E: EntropySource> core::iter::FusedIterator for Generator<E> {}
