use crate::error::Result;
use crate::evaluator::{Execution, MatMul};
use crate::grid::{CiphertextMatrix, Matrix};
use crate::pipeline::{decrypt_matrix, encrypt_matrix};
use crate::plaintext::check_headroom;
use crate::reduce::Reduction;
use bfv::decryptor::Decryptor;
use bfv::encoder::Encoder;
use bfv::encryptor::Encryptor;
use bfv::evaluator::Evaluator;
use bfv::key_generator::KeyGenerator;
use bfv::keys::{PublicKey, SecretKey};
use bfv::parameters::Parameters;
use sampling::source::Source;
use std::sync::Arc;

/// Key owner: encrypts its matrix under the secret key and decrypts the
/// product returned by the [Server].
pub struct Client {
    params: Arc<Parameters>,
    pk: PublicKey,
    encoder: Encoder,
    encryptor: Encryptor,
    decryptor: Decryptor,
}

impl Client {
    pub fn new(params: &Arc<Parameters>, source: &mut Source) -> Self {
        let (sk, pk): (SecretKey, PublicKey) = KeyGenerator::new(params).gen_key_pair(source);
        let mut encryptor: Encryptor = Encryptor::from_sk(params, &sk);
        encryptor.seed_source_xa(source.new_seed());
        encryptor.seed_source_xe(source.new_seed());
        Self {
            params: params.clone(),
            pk,
            encoder: Encoder::new(params),
            encryptor,
            decryptor: Decryptor::new(params, &sk),
        }
    }

    pub fn params(&self) -> &Arc<Parameters> {
        &self.params
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.pk
    }

    /// Rejects a job whose exact result would not survive reduction mod t.
    pub fn check_headroom(&self, a: &Matrix, b: &Matrix) -> Result<()> {
        check_headroom(a, b, self.params.t())
    }

    pub fn encrypt(&mut self, m: &Matrix) -> Result<CiphertextMatrix> {
        encrypt_matrix(m, &self.encoder, &mut self.encryptor)
    }

    pub fn decrypt(&self, c: &CiphertextMatrix) -> Result<Matrix> {
        decrypt_matrix(c, &self.encoder, &self.decryptor)
    }
}

/// Computing party: holds only the client's public key.
pub struct Server {
    encoder: Encoder,
    encryptor: Encryptor,
    evaluator: Evaluator,
    reduction: Reduction,
    execution: Execution,
}

impl Server {
    pub fn new(params: &Arc<Parameters>, pk: &PublicKey, source: &mut Source) -> Self {
        let mut encryptor: Encryptor = Encryptor::from_pk(params, pk);
        encryptor.seed_source_xa(source.new_seed());
        encryptor.seed_source_xe(source.new_seed());
        Self {
            encoder: Encoder::new(params),
            encryptor,
            evaluator: Evaluator::new(params),
            reduction: Reduction::default(),
            execution: Execution::default(),
        }
    }

    pub fn with_reduction(mut self, reduction: Reduction) -> Self {
        self.reduction = reduction;
        self
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn encrypt(&mut self, m: &Matrix) -> Result<CiphertextMatrix> {
        encrypt_matrix(m, &self.encoder, &mut self.encryptor)
    }

    pub fn multiply(&self, a: &CiphertextMatrix, b: &CiphertextMatrix) -> Result<CiphertextMatrix> {
        MatMul::new(&self.evaluator)
            .with_reduction(self.reduction)
            .with_execution(self.execution)
            .multiply(a, b)
    }
}
