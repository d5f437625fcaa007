//! Hash-based seedable PRNG
//!
//! This module implements a deterministic pseudorandom number generator
//! built on SHA3-512 used as an expansion primitive.
//!
//! The generator state is a 512-bit secret key and a 256-bit block
//! counter. Every block of output is one hash invocation over a fixed
//! framing of `(key, counter)`, so a seeded generator replays the same
//! stream on every run, and moving the counter repositions the stream
//! without materializing intermediate blocks.
//!
//! Two domain-separation tags keep the hash invocations for stream
//! output and for key mixing disjoint: an input framed for one use can
//! never collide with an input framed for the other.

use crate::error::Error;
use crate::hash::sha3_512;
use crate::os::sys_random;
use crate::primitives::{U256, U512};

/// Width of the generator key in bytes (512 bits).
pub const KEY_BYTES: usize = 64;

/// Width of one output block in bytes (one SHA3-512 digest).
pub const BLOCK_BYTES: usize = 64;

/// Width of the counter field in the hash input (256 bits).
const COUNTER_BYTES: usize = 32;

/// Zero padding placed between hash-input fields.
const PADDING_BYTES: usize = 8;

/// Domain-separation tag for stream-block generation.
const STREAM_TAG: &[u8] = b"prng_stream";

/// Domain-separation tag for entropy key mixing.
const ENTROPY_TAG: &[u8] = b"prng_entropy";

const STREAM_INPUT_LEN: usize = KEY_BYTES + PADDING_BYTES + COUNTER_BYTES + STREAM_TAG.len();
const ENTROPY_INPUT_LEN: usize =
    KEY_BYTES + PADDING_BYTES + KEY_BYTES + PADDING_BYTES + ENTROPY_TAG.len();

/// Hash-based seedable pseudorandom number generator.
///
/// The generator is a pure, sequential state machine over a secret
/// 512-bit key and a 256-bit counter. The key changes only through
/// seeding and entropy injection; draws advance only the counter.
///
/// Mutation requires `&mut self`, so a single instance cannot be raced
/// from safe code. The intended pattern for parallel use is isolation:
/// give each worker its own [`duplicate`](Self::duplicate), then
/// separate the copies with [`jumped`](Self::jumped) or
/// [`advance`](Self::advance) so their counter ranges never overlap.
pub struct HashStreamRng {
    /// Secret key (512-bit). Never exposed; replaced wholesale by
    /// seeding or entropy injection.
    key: [u8; KEY_BYTES],

    /// Block counter (256-bit). Increments once per generated block and
    /// wraps to zero past its maximum.
    counter: U256,
}

impl core::fmt::Debug for HashStreamRng {
    /// Formats the generator without revealing the secret key, preserving
    /// the "never exposed" invariant documented on [`HashStreamRng::key`].
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashStreamRng")
            .field("key", &"<redacted>")
            .field("counter", &self.counter)
            .finish()
    }
}

impl HashStreamRng {
    /// Maximum number of steps a single [`advance`](Self::advance) may
    /// take, and the exact jump distance of [`jumped`](Self::jumped):
    /// 2¹²⁸.
    pub const MAX_STEPS: U256 = Self::max_steps_be();

    /// Returns 2¹²⁸ encoded in big-endian form.
    ///
    /// This is a `const` constructor suitable for use in constant
    /// contexts.
    const fn max_steps_be() -> U256 {
        let mut out = [0u8; 32];
        out[15] = 1;
        U256(out)
    }

    /// Creates a new generator seeded from the operating system.
    ///
    /// This is equivalent to calling [`HashStreamRng::from_os`].
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Creates a new generator using entropy provided by the operating
    /// system.
    ///
    /// The OS is assumed to provide cryptographically secure randomness.
    /// The counter starts at zero.
    pub fn from_os() -> Self {
        let mut seed = [0u8; KEY_BYTES];
        sys_random(&mut seed);

        Self::from_seed(seed)
    }

    /// Creates a new generator from an explicit 512-bit seed.
    ///
    /// Two generators built from the same seed produce identical
    /// streams for identical call sequences. After being consumed, the
    /// seed buffer is wiped to avoid lingering sensitive data.
    pub fn from_seed(mut seed: [u8; KEY_BYTES]) -> Self {
        let key = seed;
        seed.fill(0);

        Self {
            key,
            counter: U256::ZERO,
        }
    }

    /// Creates a new generator from a byte-string seed of the exact key
    /// width.
    ///
    /// # Errors
    /// [`Error::InvalidSeedLength`] if the slice is not exactly
    /// [`KEY_BYTES`] long.
    pub fn from_seed_slice(seed: &[u8]) -> Result<Self, Error> {
        if seed.len() != KEY_BYTES {
            return Err(Error::InvalidSeedLength {
                expected: KEY_BYTES,
                actual: seed.len(),
            });
        }

        let mut key = [0u8; KEY_BYTES];
        key.copy_from_slice(seed);

        Ok(Self::from_seed(key))
    }

    /// Creates a new generator from an integer seed.
    ///
    /// The seed is encoded big-endian, zero-padded to the key width.
    /// Any value up to 2⁵¹² − 1 is a valid seed.
    pub fn from_seed_int<T: Into<U512>>(seed: T) -> Self {
        let key: [u8; KEY_BYTES] = seed.into().into();

        Self::from_seed(key)
    }

    /// Generates one block of the keystream.
    ///
    /// Computes `sha3_512(key ∥ pad ∥ counter ∥ tag)` and increments the
    /// counter, wrapping to zero past 2²⁵⁶ − 1. This is the sole source
    /// of randomness for every public operation: each draw consumes
    /// whole blocks through this function exactly once per unit of
    /// entropy, and no block is ever re-derived from stale state.
    fn generate_block(&mut self) -> U512 {
        let mut input = [0u8; STREAM_INPUT_LEN];

        // key ∥ pad8 ∥ counter_be32 ∥ tag
        input[..64].copy_from_slice(&self.key);
        let counter: [u8; COUNTER_BYTES] = self.counter.into();
        input[72..104].copy_from_slice(&counter);
        input[104..].copy_from_slice(STREAM_TAG);

        let digest = sha3_512(&input);

        self.counter = self.counter + U256::ONE;

        U512::from(digest)
    }

    /// Mixes 512 bits of entropy into the key.
    ///
    /// The new key is `sha3_512(key ∥ pad ∥ entropy ∥ pad ∥ tag)`. The
    /// update is one-way: the prior key is not recoverable from the new
    /// one, so output generated before the mix stays secret even if the
    /// post-mix state is compromised. The counter is untouched.
    fn mix_key(&mut self, entropy: &[u8; KEY_BYTES]) {
        let mut input = [0u8; ENTROPY_INPUT_LEN];

        // key ∥ pad8 ∥ entropy ∥ pad8 ∥ tag
        input[..64].copy_from_slice(&self.key);
        input[72..136].copy_from_slice(entropy);
        input[144..].copy_from_slice(ENTROPY_TAG);

        self.key = sha3_512(&input);
    }

    /// Fills the provided buffer with pseudorandom bytes.
    ///
    /// Bytes are generated in [`BLOCK_BYTES`]-sized blocks and copied
    /// into the output buffer in generation order; the final block is
    /// truncated to fit. An empty buffer draws nothing.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        let mut offset = 0;

        while offset < out.len() {
            let block: [u8; BLOCK_BYTES] = self.generate_block().into();

            let to_copy = BLOCK_BYTES.min(out.len() - offset);
            out[offset..offset + to_copy].copy_from_slice(&block[..to_copy]);

            offset += to_copy;
        }
    }

    /// Returns `length` pseudorandom bytes.
    ///
    /// Consumes `⌈length / BLOCK_BYTES⌉` blocks; no byte is reused
    /// across two draws.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] if `length` is zero. The generator state
    /// is unchanged on failure.
    pub fn random_bytes(&mut self, length: usize) -> Result<Vec<u8>, Error> {
        if length == 0 {
            return Err(Error::InvalidLength);
        }

        let mut out = vec![0u8; length];
        self.fill_bytes(&mut out);

        Ok(out)
    }

    /// Validates integer bounds and precomputes the rejection threshold.
    ///
    /// Returns `None` for the full-span range `[0, 2⁵¹² − 1]`, whose
    /// range size equals the whole block value space: every raw block is
    /// accepted as-is and no modulus is needed.
    fn rejection_params(lower: U512, upper: U512) -> Result<Option<(U512, U512)>, Error> {
        if lower >= upper {
            return Err(Error::InvalidBounds);
        }

        let span = upper - lower;
        if span == U512::MAX {
            return Ok(None);
        }

        let range_size = span + U512::ONE;

        // limit = max − ((max + 1) mod range_size), with the add folded
        // into the residue because max + 1 exceeds the value space.
        let limit = U512::MAX - ((U512::MAX % range_size + U512::ONE) % range_size);

        Ok(Some((range_size, limit)))
    }

    /// Draws one uniformly distributed value in `[lower, upper]` by
    /// rejection sampling.
    ///
    /// Raw blocks above `limit` are discarded and redrawn, which removes
    /// the modulo bias entirely: the accepted values split into whole
    /// multiples of `range_size`. When `range_size` is a power of two,
    /// `limit` equals the maximum block value and no draw is ever
    /// rejected. The expected number of iterations is below two for any
    /// range.
    fn rejection_draw(&mut self, lower: U512, range_size: U512, limit: U512) -> U512 {
        loop {
            let x = self.generate_block();

            if x <= limit {
                return lower + x % range_size;
            }
        }
    }

    /// Draws one uniformly distributed integer in `[lower, upper]`.
    ///
    /// # Errors
    /// [`Error::InvalidBounds`] unless `lower < upper`. The generator
    /// state is unchanged on failure.
    pub fn random_int<T: Into<U512>>(&mut self, lower: T, upper: T) -> Result<U512, Error> {
        let (lower, upper) = (lower.into(), upper.into());

        match Self::rejection_params(lower, upper)? {
            Some((range_size, limit)) => Ok(self.rejection_draw(lower, range_size, limit)),
            None => Ok(lower + self.generate_block()),
        }
    }

    /// Draws `count` independent uniformly distributed integers in
    /// `[lower, upper]`, in generation order.
    ///
    /// # Errors
    /// [`Error::InvalidCount`] if `count` is zero,
    /// [`Error::InvalidBounds`] unless `lower < upper`. The generator
    /// state is unchanged on failure.
    pub fn random_ints<T: Into<U512>>(
        &mut self,
        lower: T,
        upper: T,
        count: usize,
    ) -> Result<Vec<U512>, Error> {
        let (lower, upper) = (lower.into(), upper.into());

        if count == 0 {
            return Err(Error::InvalidCount);
        }

        let params = Self::rejection_params(lower, upper)?;
        let mut out = Vec::with_capacity(count);

        for _ in 0..count {
            let value = match params {
                Some((range_size, limit)) => self.rejection_draw(lower, range_size, limit),
                None => lower + self.generate_block(),
            };

            out.push(value);
        }

        Ok(out)
    }

    /// Validates float bounds.
    fn float_params(lower: f64, upper: f64) -> Result<(), Error> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(Error::InvalidBounds);
        }

        if upper - lower > f64::from(U512::MAX) {
            return Err(Error::RangeTooLarge);
        }

        Ok(())
    }

    /// Rescales one raw block onto `[lower, upper]`.
    fn float_draw(&mut self, lower: f64, upper: f64) -> f64 {
        let x = f64::from(self.generate_block());

        (x / f64::from(U512::MAX)) * (upper - lower) + lower
    }

    /// Draws one float in `[lower, upper]` by linearly rescaling a
    /// single raw block.
    ///
    /// Unlike [`random_int`](Self::random_int) this draw is not
    /// rejection-sampled: the rescaling carries a negligible but nonzero
    /// bias near the boundaries. This is a fixed property of the
    /// construction; changing it would break reproducibility with
    /// existing seeded sequences.
    ///
    /// # Errors
    /// [`Error::InvalidBounds`] unless both bounds are finite and
    /// `lower < upper`; [`Error::RangeTooLarge`] if the span exceeds the
    /// block value space. The generator state is unchanged on failure.
    pub fn random_float(&mut self, lower: f64, upper: f64) -> Result<f64, Error> {
        Self::float_params(lower, upper)?;

        Ok(self.float_draw(lower, upper))
    }

    /// Draws `count` independent floats in `[lower, upper]`, in
    /// generation order.
    ///
    /// # Errors
    /// [`Error::InvalidCount`] if `count` is zero, otherwise as
    /// [`random_float`](Self::random_float). The generator state is
    /// unchanged on failure.
    pub fn random_floats(&mut self, lower: f64, upper: f64, count: usize) -> Result<Vec<f64>, Error> {
        if count == 0 {
            return Err(Error::InvalidCount);
        }

        Self::float_params(lower, upper)?;

        Ok((0..count).map(|_| self.float_draw(lower, upper)).collect())
    }

    /// Mixes fresh operating-system entropy into the key.
    ///
    /// Provides forward secrecy on demand: compromise of the
    /// post-injection key does not reveal pre-injection output. The
    /// counter is untouched. Returns the generator to support chained
    /// calls.
    pub fn add_entropy(&mut self) -> &mut Self {
        let mut fresh = [0u8; KEY_BYTES];
        sys_random(&mut fresh);

        self.mix_key(&fresh);
        fresh.fill(0);

        self
    }

    /// Mixes caller-provided entropy of the exact key width into the
    /// key.
    ///
    /// # Errors
    /// [`Error::InvalidEntropyLength`] if the slice is not exactly
    /// [`KEY_BYTES`] long. The generator state is unchanged on failure.
    pub fn add_entropy_bytes(&mut self, entropy: &[u8]) -> Result<&mut Self, Error> {
        if entropy.len() != KEY_BYTES {
            return Err(Error::InvalidEntropyLength {
                expected: KEY_BYTES,
                actual: entropy.len(),
            });
        }

        let mut buf = [0u8; KEY_BYTES];
        buf.copy_from_slice(entropy);

        self.mix_key(&buf);

        Ok(self)
    }

    /// Mixes an integer entropy value into the key.
    ///
    /// The value is encoded big-endian, zero-padded to the key width,
    /// then mixed like byte-string entropy.
    pub fn add_entropy_int<T: Into<U512>>(&mut self, entropy: T) -> &mut Self {
        let bytes: [u8; KEY_BYTES] = entropy.into().into();

        self.mix_key(&bytes);

        self
    }

    /// Skips `steps` blocks ahead in the stream.
    ///
    /// The counter moves to `(counter + steps) mod 2²⁵⁶` in O(1),
    /// without materializing intermediate blocks. The key is untouched.
    ///
    /// # Errors
    /// [`Error::InvalidStepCount`] if `steps` is zero,
    /// [`Error::StepCountTooLarge`] if `steps` exceeds
    /// [`MAX_STEPS`](Self::MAX_STEPS). The generator state is unchanged
    /// on failure.
    pub fn advance<T: Into<U256>>(&mut self, steps: T) -> Result<&mut Self, Error> {
        let steps = steps.into();

        if steps == U256::ZERO {
            return Err(Error::InvalidStepCount);
        }
        if steps > Self::MAX_STEPS {
            return Err(Error::StepCountTooLarge);
        }

        self.counter = self.counter + steps;

        Ok(self)
    }

    /// Jumps [`MAX_STEPS`](Self::MAX_STEPS) blocks ahead in the stream.
    ///
    /// Equivalent to `advance(2^128)`. Partitioning one seed with
    /// repeated jumps gives workers widely separated counter ranges
    /// that never overlap in practice.
    pub fn jumped(&mut self) -> &mut Self {
        self.counter = self.counter + Self::MAX_STEPS;

        self
    }

    /// Produces a fully independent copy of the generator.
    ///
    /// The copy carries its own key and counter storage with the
    /// current values; subsequent draws, entropy injection, or
    /// advancement on either instance never affect the other.
    pub fn duplicate(&self) -> Self {
        Self {
            key: self.key,
            counter: self.counter,
        }
    }
}

impl Default for HashStreamRng {
    /// Creates a default generator instance seeded from the operating
    /// system.
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The counter-wrap invariant is 2^256 increments away from a fresh
    // generator, so it is only observable with direct counter access.

    #[test]
    fn counter_wraps_to_zero_past_max() {
        let mut rng = HashStreamRng::from_seed([0u8; KEY_BYTES]);
        rng.counter = U256::MAX;

        rng.generate_block();

        assert_eq!(rng.counter, U256::ZERO);
    }

    #[test]
    fn advance_wraps_modulo_counter_space() {
        let mut rng = HashStreamRng::from_seed([0u8; KEY_BYTES]);
        rng.counter = U256::MAX;

        rng.advance(5u64).unwrap();

        assert_eq!(rng.counter, U256::from(4u64));
    }

    #[test]
    fn power_of_two_range_consumes_one_block_per_draw() {
        let mut rng = HashStreamRng::from_seed([0u8; KEY_BYTES]);

        rng.random_ints(0u8, 255u8, 100).unwrap();

        assert_eq!(rng.counter, U256::from(100u64));
    }

    #[test]
    fn failed_validation_leaves_counter_untouched() {
        let mut rng = HashStreamRng::from_seed([0u8; KEY_BYTES]);

        assert!(rng.random_ints(9u8, 3u8, 10).is_err());
        assert!(rng.random_bytes(0).is_err());
        assert!(rng.advance(0u64).is_err());

        assert_eq!(rng.counter, U256::ZERO);
    }

    #[test]
    fn max_steps_is_two_pow_128() {
        let mut expected = [0u8; 32];
        expected[15] = 1;

        assert_eq!(HashStreamRng::MAX_STEPS, U256::from(expected));
    }
}
