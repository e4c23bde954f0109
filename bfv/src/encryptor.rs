use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keys::{PublicKey, SecretKey};
use crate::parameters::Parameters;
use crate::plaintext::Plaintext;
use itertools::izip;
use math::poly::PolyRNS;
use math::ring::RingRNS;
use sampling::source::{Source, new_seed};
use std::sync::Arc;

enum EncryptionKey {
    Secret(PolyRNS),
    Public([PolyRNS; 2]),
}

/// Encrypts plaintexts under either a secret key or a public key. Both
/// produce ciphertexts of degree 1 that decrypt under the same secret key.
pub struct Encryptor {
    params: Arc<Parameters>,
    key: EncryptionKey,
    source_xa: Source,
    source_xe: Source,
}

impl Encryptor {
    pub fn from_sk(params: &Arc<Parameters>, sk: &SecretKey) -> Self {
        Self::new(params, EncryptionKey::Secret(sk.value.clone()))
    }

    pub fn from_pk(params: &Arc<Parameters>, pk: &PublicKey) -> Self {
        Self::new(params, EncryptionKey::Public(pk.value.clone()))
    }

    fn new(params: &Arc<Parameters>, key: EncryptionKey) -> Self {
        Self {
            params: params.clone(),
            key,
            source_xa: Source::new(new_seed()),
            source_xe: Source::new(new_seed()),
        }
    }

    /// Seeds the source of the uniform mask (secret key) or of the ternary
    /// ephemeral secret (public key).
    pub fn seed_source_xa(&mut self, seed: [u8; 32]) {
        self.source_xa = Source::new(seed)
    }

    pub fn seed_source_xe(&mut self, seed: [u8; 32]) {
        self.source_xe = Source::new(seed)
    }

    pub fn encrypt(&mut self, pt: &Plaintext) -> Result<Ciphertext> {
        if pt.n() != self.params.n() {
            return Err(Error::RingDegreeMismatch {
                expected: self.params.n(),
                found: pt.n(),
            });
        }

        let ring: &RingRNS = self.params.ring_q();

        let mut value: [PolyRNS; 2] = match &self.key {
            EncryptionKey::Secret(sk) => {
                encrypt_zero_sk(&self.params, sk, &mut self.source_xa, &mut self.source_xe)
            }
            EncryptionKey::Public(pk) => {
                encrypt_zero_pk(&self.params, pk, &mut self.source_xa, &mut self.source_xe)
            }
        };

        let mut scaled: PolyRNS = ring.new_polyrns();
        scale_up(&self.params, pt, &mut scaled);
        ring.add_inplace(&scaled, &mut value[0]);

        Ok(Ciphertext {
            value: Vec::from(value),
        })
    }
}

/// Returns (-(a*s) + e, a) with a uniform in R_Q and e Gaussian.
pub(crate) fn encrypt_zero_sk(
    params: &Parameters,
    sk: &PolyRNS,
    source_xa: &mut Source,
    source_xe: &mut Source,
) -> [PolyRNS; 2] {
    let ring: &RingRNS = params.ring_q();

    let mut a: PolyRNS = ring.new_polyrns();
    ring.fill_uniform(source_xa, &mut a);

    // c0 <- -(a * s)
    let mut c0: PolyRNS = ring.new_polyrns();
    ring.mul(&a, sk, &mut c0);
    ring.neg_inplace(&mut c0);

    // c0 <- c0 + e
    let mut e: PolyRNS = ring.new_polyrns();
    ring.fill_normal(source_xe, params.xe_dist(), params.xe_bound(), &mut e);
    ring.add_inplace(&e, &mut c0);

    [c0, a]
}

/// Returns (p0*u + e0, p1*u + e1) with u ternary and e0, e1 Gaussian.
fn encrypt_zero_pk(
    params: &Parameters,
    pk: &[PolyRNS; 2],
    source_xu: &mut Source,
    source_xe: &mut Source,
) -> [PolyRNS; 2] {
    let ring: &RingRNS = params.ring_q();

    let mut u: PolyRNS = ring.new_polyrns();
    ring.fill_ternary(source_xu, params.xs(), &mut u);

    let mut e: PolyRNS = ring.new_polyrns();
    let mut ct: [PolyRNS; 2] = [ring.new_polyrns(), ring.new_polyrns()];
    izip!(pk.iter(), ct.iter_mut()).for_each(|(p, c)| {
        ring.mul(p, &u, c);
        ring.fill_normal(source_xe, params.xe_dist(), params.xe_bound(), &mut e);
        ring.add_inplace(&e, c);
    });

    ct
}

/// res <- floor(Q/t) * m
fn scale_up(params: &Parameters, pt: &Plaintext, res: &mut PolyRNS) {
    izip!(params.ring_q().rings(), params.delta(), res.0.iter_mut()).for_each(|(r, delta, res)| {
        let delta = r.modulus.prepare_shoup(*delta);
        izip!(pt.value(), res.0.iter_mut())
            .for_each(|(m, res)| *res = r.modulus.mul_shoup(delta, *m % r.modulus.q()));
    });
}
