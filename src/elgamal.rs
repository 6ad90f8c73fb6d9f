use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::Rng;

use crate::algebra::group::Group;
use crate::encoding::Encoder;
use crate::error::Result;

/// The ElGamal cryptosystem over an arbitrary [`Group`] and a
/// compatible [`Encoder`].
///
/// The scheme holds the group, a fixed generator and the encoder; keys
/// and randomness are supplied per call, and no state survives between
/// calls. Private keys are integer exponents in `[1, order)`, public
/// keys are group elements, and one plaintext unit becomes one
/// ciphertext pair `(c1, c2)`.
///
/// # Example
///
/// ```
/// use gamal::{ChunkEncoder, ElGamal, Zn};
/// use num_bigint::BigUint;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let group = Zn::new(BigUint::from(2_147_483_647u32));
/// let scheme = ElGamal::new(group, BigUint::from(7u32), ChunkEncoder::new(3));
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let (private, public) = scheme.generate_keys(&mut rng);
/// let cipher = scheme.encrypt(&mut rng, &public, "top secret").unwrap();
/// assert_eq!(scheme.decrypt(&private, &cipher).unwrap(), "top secret");
/// ```
#[derive(Clone, Debug)]
pub struct ElGamal<G: Group, E> {
    group: G,
    generator: G::Elem,
    encoder: E,
}

impl<G, E> ElGamal<G, E>
where
    G: Group,
    E: Encoder<Code = G::Elem>,
{
    pub fn new(group: G, generator: G::Elem, encoder: E) -> Self {
        let generator = group.normalize(generator);
        Self {
            group,
            generator,
            encoder,
        }
    }

    pub fn group(&self) -> &G {
        &self.group
    }

    pub fn generator(&self) -> &G::Elem {
        &self.generator
    }

    /// Draw a key pair: a private exponent in `[1, order)` and the
    /// matching public element `generator^s`.
    pub fn generate_keys<R: Rng>(&self, rng: &mut R) -> (BigUint, G::Elem) {
        let s = rng.gen_biguint_range(&BigUint::one(), &self.group.order());
        let public = self.group.pow_unsigned(&self.generator, &s);
        (s, public)
    }

    /// Encrypt a message under a public key.
    ///
    /// Each encoded element `m` is blinded with a fresh ephemeral
    /// exponent `y`, producing `(generator^y, public_key^y * m)`.
    pub fn encrypt<R: Rng>(
        &self,
        rng: &mut R,
        public_key: &G::Elem,
        message: &str,
    ) -> Result<Vec<(G::Elem, G::Elem)>> {
        let code = self.encoder.encode(message)?;
        Ok(code
            .iter()
            .map(|m| self.encrypt_one(rng, public_key, m))
            .collect())
    }

    /// Decrypt ciphertext pairs back to text.
    pub fn decrypt(
        &self,
        private_key: &BigUint,
        cipher: &[(G::Elem, G::Elem)],
    ) -> Result<String> {
        let code = cipher
            .iter()
            .map(|c| self.decrypt_one(private_key, c))
            .collect::<Result<Vec<_>>>()?;
        self.encoder.decode(&code)
    }

    fn encrypt_one<R: Rng>(
        &self,
        rng: &mut R,
        public_key: &G::Elem,
        m: &G::Elem,
    ) -> (G::Elem, G::Elem) {
        let y = rng.gen_biguint_below(&self.group.order());
        let c1 = self.group.pow_unsigned(&self.generator, &y);
        let c2 = self.group.mul(&self.group.pow_unsigned(public_key, &y), m);
        (c1, c2)
    }

    fn decrypt_one(
        &self,
        private_key: &BigUint,
        (c1, c2): &(G::Elem, G::Elem),
    ) -> Result<G::Elem> {
        let shared = self.group.pow_unsigned(c1, private_key);
        let m = self.group.true_div(c2, &shared)?;
        Ok(self.group.normalize(m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::chunk::ChunkEncoder;
    use crate::structures::zn::Zn;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scheme() -> ElGamal<Zn, ChunkEncoder> {
        // 2^31 - 1 is prime; 7 generates a large subgroup
        let group = Zn::new(BigUint::from(2_147_483_647u32));
        ElGamal::new(group, BigUint::from(7u32), ChunkEncoder::new(3))
    }

    #[test]
    fn round_trip() {
        let s = scheme();
        let mut rng = StdRng::seed_from_u64(1);
        let (private, public) = s.generate_keys(&mut rng);
        let text = "The_Magic_Words_are_Squeamish_Ossifrage";
        let cipher = s.encrypt(&mut rng, &public, text).unwrap();
        assert_eq!(s.decrypt(&private, &cipher).unwrap(), text);
    }

    #[test]
    fn wrong_key_garbles_or_fails() {
        let s = scheme();
        let mut rng = StdRng::seed_from_u64(2);
        let (private, public) = s.generate_keys(&mut rng);
        let cipher = s.encrypt(&mut rng, &public, "hello").unwrap();
        let wrong = &private + 1u32;
        let decrypted = s.decrypt(&wrong, &cipher);
        assert!(decrypted.is_err() || decrypted.unwrap() != "hello");
    }

    #[test]
    fn fresh_randomness_per_element() {
        let s = scheme();
        let mut rng = StdRng::seed_from_u64(3);
        let (_, public) = s.generate_keys(&mut rng);
        // two identical plaintext chunks must not share c1
        let cipher = s.encrypt(&mut rng, &public, "aaaaaa").unwrap();
        assert_eq!(cipher.len(), 2);
        assert_ne!(cipher[0].0, cipher[1].0);
    }

    #[test]
    fn empty_message() {
        let s = scheme();
        let mut rng = StdRng::seed_from_u64(4);
        let (private, public) = s.generate_keys(&mut rng);
        let cipher = s.encrypt(&mut rng, &public, "").unwrap();
        assert!(cipher.is_empty());
        assert_eq!(s.decrypt(&private, &cipher).unwrap(), "");
    }
}
