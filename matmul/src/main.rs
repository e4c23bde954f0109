use bfv::parameters::{Parameters, ParametersLiteral};
use matmul::evaluator::Execution;
use matmul::generate::generate;
use matmul::grid::{CiphertextMatrix, Grid, Matrix};
use matmul::plaintext::multiply;
use matmul::protocol::{Client, Server};
use rug::Integer;
use sampling::source::{Source, new_seed};
use std::sync::Arc;
use std::time::Instant;

const ROWS: usize = 5;
const COLS: usize = 5;
const BOUND: u64 = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut source: Source = Source::new(new_seed());

    let matrix_a: Matrix = generate(ROWS, COLS, BOUND, &mut source)?;
    let matrix_b: Matrix = generate(ROWS, COLS, BOUND, &mut source)?;

    println!("matrix A: {}", matrix_a);
    println!("matrix B: {}", matrix_b);

    let start: Instant = Instant::now();
    let product: Grid<Integer> = multiply(&matrix_a, &matrix_b)?;
    let elapsed: f64 = start.elapsed().as_secs_f64() * 1000.0;
    println!("A*B =: {}", product);
    println!();
    println!("Regular Calc Done in {:.6} ms", elapsed);
    println!();

    let params: Arc<Parameters> = Arc::new(Parameters::new(&ParametersLiteral::MEDIUM)?);

    println!("================================================================");
    println!("	  Homomorphic computations on batched integers");
    println!("================================================================");
    println!();
    println!(
        "Parameters : N={}, T={}, Q = {} bits, sigma = {:.6} ",
        params.n(),
        params.t(),
        params.log_q(),
        params.xe()
    );
    println!();

    let mut client: Client = Client::new(&params, &mut source);
    client.check_headroom(&matrix_a, &matrix_b)?;
    let mut server: Server = Server::new(&params, client.public_key(), &mut source).with_execution(Execution::Parallel);

    let start: Instant = Instant::now();
    let encrypted_a: CiphertextMatrix = client.encrypt(&matrix_a)?;
    let encrypted_b: CiphertextMatrix = server.encrypt(&matrix_b)?;
    let encrypted_product: CiphertextMatrix = server.multiply(&encrypted_a, &encrypted_b)?;
    let decrypted: Matrix = client.decrypt(&encrypted_product)?;
    println!("Homomorphic calc Done in {} ms", start.elapsed().as_millis());

    println!("{}", decrypted);

    Ok(())
}
