//! Integration with `rand` (v0.8) crate.

use super::{EntropySource, Generator};
use crate::EntropyError;
use rand::{rngs::OsRng, RngCore};

/// An adapter that implements [`EntropySource`] for [`RngCore`] types.
///
/// The default wraps [`OsRng`], the operating system's random device.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> EntropySource for Adapter<T> {
    fn try_fill_seed(&mut self, dest: &mut [u8; 16]) -> Result<(), EntropyError> {
        self.0
            .try_fill_bytes(dest)
            .map_err(|err| EntropyError::Unavailable {
                code: err.raw_os_error(),
            })
    }
}

impl<T: RngCore> Generator<Adapter<T>> {
    /// Creates a generator object that seeds itself from a random number generator that
    /// implements [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// The seed is all the generator ever draws from `rng`, so `rng` should be cryptographically
    /// secure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashuuid::Generator;
    ///
    /// let mut g = Generator::with_rand08(rand::rngs::OsRng);
    /// println!("{}", g.generate());
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}

impl Generator<Adapter<OsRng>> {
    /// Creates a generator object that seeds itself from the operating system.
    pub const fn with_os_rng() -> Self {
        Self::with_rand08(OsRng)
    }
}

#[cfg(test)]
mod tests {
    use super::Adapter;
    use crate::{EntropyError, EntropySource, Generator};
    use rand::{
        rngs::{mock::StepRng, OsRng},
        RngCore,
    };

    /// Random number generator that fails every request.
    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            unimplemented!()
        }

        fn next_u64(&mut self) -> u64 {
            unimplemented!()
        }

        fn fill_bytes(&mut self, _: &mut [u8]) {
            unimplemented!()
        }

        fn try_fill_bytes(&mut self, _: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::from(core::num::NonZeroU32::new(rand::Error::CUSTOM_START).unwrap()))
        }
    }

    /// Fills seed from wrapped random number generator
    #[test]
    fn fills_seed_from_wrapped_random_number_generator() {
        let mut seed = [0u8; 16];
        Adapter(StepRng::new(1, 0)).try_fill_seed(&mut seed).unwrap();
        assert_eq!(seed, [1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0]);
    }

    /// Seeds distinct counters from operating system
    #[test]
    fn seeds_distinct_counters_from_operating_system() {
        let mut a = Generator::with_os_rng();
        let mut b: Generator<Adapter<OsRng>> = Default::default();
        assert_ne!(a.generate(), b.generate());
    }

    /// Seeds clone of seeded generator afresh from operating system
    #[test]
    fn seeds_clone_of_seeded_generator_afresh_from_operating_system() {
        let mut a = Generator::with_os_rng();
        a.generate();
        let mut b = a.clone();
        assert!(!b.is_seeded());
        assert_ne!(a.generate(), b.generate());
        assert!(!format!("{:?}", a).contains('['));
    }

    /// Reports failure of wrapped random number generator
    #[test]
    fn reports_failure_of_wrapped_random_number_generator() {
        let mut g = Generator::with_rand08(BrokenRng);
        assert!(matches!(
            g.try_generate(),
            Err(EntropyError::Unavailable { .. })
        ));
    }
}
