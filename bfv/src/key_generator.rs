use crate::encryptor::encrypt_zero_sk;
use crate::keys::{PublicKey, SecretKey};
use crate::parameters::Parameters;
use math::poly::PolyRNS;
use sampling::source::Source;
use std::sync::Arc;

pub struct KeyGenerator {
    params: Arc<Parameters>,
}

impl KeyGenerator {
    pub fn new(params: &Arc<Parameters>) -> Self {
        Self {
            params: params.clone(),
        }
    }

    pub fn gen_secret_key(&self, source: &mut Source) -> SecretKey {
        let mut value: PolyRNS = self.params.ring_q().new_polyrns();
        self.params
            .ring_q()
            .fill_ternary(source, self.params.xs(), &mut value);
        SecretKey { value }
    }

    pub fn gen_public_key(&self, sk: &SecretKey, source: &mut Source) -> PublicKey {
        let mut xa_source: Source = source.branch();
        let mut xe_source: Source = source.branch();
        PublicKey {
            value: encrypt_zero_sk(&self.params, &sk.value, &mut xa_source, &mut xe_source),
        }
    }

    pub fn gen_key_pair(&self, source: &mut Source) -> (SecretKey, PublicKey) {
        let sk: SecretKey = self.gen_secret_key(source);
        let pk: PublicKey = self.gen_public_key(&sk, source);
        (sk, pk)
    }
}
